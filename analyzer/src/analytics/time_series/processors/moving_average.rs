use super::TimeSeriesProcessor;
use cwnd_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};
use tracing::warn;

/// Simple moving average over complete windows only.
///
/// Each output point carries the time of the last sample of its window, so a
/// series of `n` points yields `n - window_size + 1` averages.
pub struct MovingAverageProcessor {
    window_size: usize,
}

impl MovingAverageProcessor {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Window length used for a series of `count` samples: `min(max_window, count / divisor)`.
    pub fn window_for(count: usize, max_window: usize, divisor: usize) -> usize {
        max_window.min(count / divisor.max(1))
    }
}

impl TimeSeriesProcessor for MovingAverageProcessor {
    fn process(&self, data: &TimeSeries) -> TimeSeries {
        if self.window_size == 0 || data.len() < self.window_size {
            warn!(
                "Cannot average {} points over a window of {}",
                data.len(),
                self.window_size
            );
            return TimeSeries::new(Vec::new(), TimeSeriesKind::MovingAverage);
        }

        let points = data
            .points
            .windows(self.window_size)
            .map(|window| {
                let sum: f64 = window.iter().map(|point| point.value).sum();
                TimePoint::new(
                    window[window.len() - 1].time_s,
                    sum / self.window_size as f64,
                )
            })
            .collect();

        TimeSeries::new(points, TimeSeriesKind::MovingAverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn series(count: usize) -> TimeSeries {
        TimeSeries::new(
            (0..count)
                .map(|i| TimePoint::new(i as f64, i as f64))
                .collect(),
            TimeSeriesKind::CongestionWindow,
        )
    }

    #[test_case(100, 10; "hundred points")]
    #[test_case(500, 50; "capped window")]
    #[test_case(2, 2; "window equals length")]
    #[test_case(37, 3; "odd length")]
    fn output_length_should_be_count_minus_window_plus_one(count: usize, window: usize) {
        let averaged = MovingAverageProcessor::new(window).process(&series(count));
        assert_eq!(averaged.len(), count - window + 1);
    }

    #[test]
    fn should_average_and_align_to_window_end() {
        let averaged = MovingAverageProcessor::new(3).process(&series(5));

        assert_eq!(
            averaged.points,
            vec![
                TimePoint::new(2.0, 1.0),
                TimePoint::new(3.0, 2.0),
                TimePoint::new(4.0, 3.0),
            ]
        );
        assert_eq!(averaged.kind, TimeSeriesKind::MovingAverage);
    }

    #[test]
    fn large_values_should_not_skew_later_windows() {
        let data = TimeSeries::new(
            [1e17, 1.0, 1.0, 1.0]
                .iter()
                .enumerate()
                .map(|(i, v)| TimePoint::new(i as f64, *v))
                .collect(),
            TimeSeriesKind::CongestionWindow,
        );

        let averaged = MovingAverageProcessor::new(2).process(&data);

        assert_eq!(averaged.points[1].value, 1.0);
        assert_eq!(averaged.points[2].value, 1.0);
    }

    #[test]
    fn window_longer_than_series_yields_empty_series() {
        assert!(MovingAverageProcessor::new(10).process(&series(5)).is_empty());
    }

    #[test_case(500, 50; "capped at fifty")]
    #[test_case(200, 20; "tenth of the samples")]
    #[test_case(15, 1; "too short")]
    #[test_case(3, 0; "tiny")]
    fn window_for_should_follow_count(count: usize, expected: usize) {
        assert_eq!(MovingAverageProcessor::window_for(count, 50, 10), expected);
    }
}
