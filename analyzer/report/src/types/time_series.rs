use serde::{Deserialize, Serialize};

/// A point in time series data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TimePoint {
    pub time_s: f64,
    pub value: f64,
}

impl TimePoint {
    pub fn new(time_s: f64, value: f64) -> Self {
        Self { time_s, value }
    }
}

/// Time series data with associated metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimeSeries {
    pub points: Vec<TimePoint>,
    #[serde(skip)]
    pub kind: TimeSeriesKind,
}

/// Types of time series data we can produce
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TimeSeriesKind {
    #[default]
    CongestionWindow,
    Generic,
    Trend,
    MovingAverage,
}

impl TimeSeries {
    pub fn new(points: Vec<TimePoint>, kind: TimeSeriesKind) -> Self {
        Self { points, kind }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time_s)
    }

    /// Smallest and largest time, in seconds.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.time_s;
        Some(
            self.times()
                .fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))),
        )
    }

    /// Returns the first point whose time is closest to `time_s`.
    pub fn nearest_point(&self, time_s: f64) -> Option<&TimePoint> {
        let mut nearest: Option<&TimePoint> = None;
        for point in &self.points {
            let distance = (point.time_s - time_s).abs();
            match nearest {
                Some(best) if (best.time_s - time_s).abs() <= distance => {}
                _ => nearest = Some(point),
            }
        }
        nearest
    }

    pub fn as_charming_points(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|p| vec![p.time_s, p.value])
            .collect()
    }

    pub fn as_plot_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.time_s, p.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TimeSeries {
        TimeSeries::new(
            vec![
                TimePoint::new(0.0, 1.0),
                TimePoint::new(1.0, 2.0),
                TimePoint::new(2.0, 1.0),
            ],
            TimeSeriesKind::CongestionWindow,
        )
    }

    #[test]
    fn nearest_point_should_pick_minimal_distance() {
        let series = series();
        assert_eq!(series.nearest_point(1.2).map(|p| p.value), Some(2.0));
        assert_eq!(series.nearest_point(-5.0).map(|p| p.time_s), Some(0.0));
        assert_eq!(series.nearest_point(99.0).map(|p| p.time_s), Some(2.0));
    }

    #[test]
    fn nearest_point_should_prefer_first_on_tie() {
        let series = series();
        assert_eq!(series.nearest_point(0.5).map(|p| p.time_s), Some(0.0));
    }

    #[test]
    fn nearest_point_of_empty_series_is_none() {
        assert!(TimeSeries::default().nearest_point(1.0).is_none());
    }

    #[test]
    fn time_range_should_cover_unsorted_points() {
        let series = TimeSeries::new(
            vec![TimePoint::new(3.0, 1.0), TimePoint::new(1.0, 1.0)],
            TimeSeriesKind::Generic,
        );
        assert_eq!(series.time_range(), Some((1.0, 3.0)));
    }
}
