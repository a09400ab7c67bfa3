use super::phases::{classify_transitions, split_phases};
use cwnd_report::summary::SummaryStats;
use cwnd_report::time_series::TimeSeries;
use cwnd_report::utils::{max, mean, min, std_dev};

/// Aggregates the window trace; `None` when there are no samples.
pub fn from_samples(
    samples: &TimeSeries,
    total_losses: u64,
    phase_split_ratio: f64,
) -> Option<SummaryStats> {
    let max_value = max(samples)?;
    let min_value = min(samples)?;
    let mean_value = mean(samples)?;
    let std_dev_value = std_dev(samples)?;

    let data_points = samples.len() as u64;
    let total_time_secs = samples
        .time_range()
        .map(|(first, last)| last - first)
        .unwrap_or(0.0);

    let values: Vec<f64> = samples.values().collect();
    let transitions = classify_transitions(&values);

    let efficiency_percent = if max_value > 0.0 {
        mean_value / max_value * 100.0
    } else {
        0.0
    };
    let loss_rate_per_mille = total_losses as f64 / data_points as f64 * 1000.0;

    let phase_split_value = max_value * phase_split_ratio;
    let (slow_start_samples, congestion_avoidance_samples) =
        split_phases(&values, phase_split_value);

    Some(SummaryStats {
        max_value,
        min_value,
        mean_value,
        std_dev_value,
        data_points,
        total_time_secs,
        fast_growth_steps: transitions.fast_growth_steps,
        linear_growth_steps: transitions.linear_growth_steps,
        reduction_events: transitions.reductions.len() as u64,
        total_losses,
        loss_rate_per_mille,
        efficiency_percent,
        phase_split_value,
        slow_start_samples,
        congestion_avoidance_samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwnd_report::time_series::{TimePoint, TimeSeriesKind};
    use test_case::test_case;

    fn series(points: &[(f64, f64)]) -> TimeSeries {
        TimeSeries::new(
            points.iter().map(|(t, v)| TimePoint::new(*t, *v)).collect(),
            TimeSeriesKind::CongestionWindow,
        )
    }

    #[test]
    fn should_summarize_three_sample_trace() {
        let samples = series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 1.0)]);

        let stats = from_samples(&samples, 0, 0.3).unwrap();

        assert!((stats.mean_value - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.max_value, 2.0);
        assert_eq!(stats.min_value, 1.0);
        assert_eq!(stats.data_points, 3);
        assert_eq!(stats.total_time_secs, 2.0);
        assert_eq!(stats.linear_growth_steps, 1);
        assert_eq!(stats.fast_growth_steps, 0);
        assert_eq!(stats.reduction_events, 1);
        assert!((stats.efficiency_percent - 66.666_666).abs() < 1e-3);
        assert!((stats.std_dev_value - (2.0f64 / 9.0).sqrt()).abs() < 1e-9);
        assert_eq!(stats.loss_rate_per_mille, 0.0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(from_samples(&TimeSeries::default(), 3, 0.3).is_none());
    }

    #[test]
    fn zero_max_gives_zero_efficiency() {
        let stats = from_samples(&series(&[(0.0, 0.0), (1.0, 0.0)]), 0, 0.3).unwrap();

        assert_eq!(stats.efficiency_percent, 0.0);
        assert_eq!(stats.slow_start_samples, 0);
        assert_eq!(stats.congestion_avoidance_samples, 2);
    }

    #[test]
    fn single_sample_has_zero_duration() {
        let stats = from_samples(&series(&[(5.0, 3.0)]), 0, 0.3).unwrap();

        assert_eq!(stats.total_time_secs, 0.0);
        assert_eq!(stats.efficiency_percent, 100.0);
    }

    #[test_case(0, 0.0; "no losses")]
    #[test_case(1, 250.0; "one loss")]
    #[test_case(2, 500.0; "two losses")]
    #[test_case(8, 2000.0; "more losses than samples")]
    fn loss_rate_should_scale_with_loss_count(losses: u64, expected: f64) {
        let samples = series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 4.0), (3.0, 8.0)]);

        let stats = from_samples(&samples, losses, 0.3).unwrap();

        assert_eq!(stats.loss_rate_per_mille, expected);
    }

    #[test]
    fn efficiency_should_stay_within_percent_range() {
        let samples = series(&[(0.0, 1.0), (1.0, 40.0), (2.0, 64.0), (3.0, 20.0)]);

        let stats = from_samples(&samples, 0, 0.3).unwrap();

        assert!(stats.efficiency_percent > 0.0 && stats.efficiency_percent <= 100.0);
        assert_eq!(stats.phase_split_value, 64.0 * 0.3);
        assert_eq!(stats.slow_start_samples, 1);
        assert_eq!(stats.congestion_avoidance_samples, 3);
    }
}
