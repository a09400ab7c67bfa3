use cwnd_report::loss_event::{LossEvent, LossMarker};
use cwnd_report::time_series::TimeSeries;

/// Places every loss on the window trace at the value of the sample closest in time.
pub fn match_losses(samples: &TimeSeries, losses: &[LossEvent]) -> Vec<LossMarker> {
    losses
        .iter()
        .filter_map(|loss| {
            let time_s = loss.time_s();
            samples
                .nearest_point(time_s)
                .map(|point| LossMarker::new(time_s, point.value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwnd_report::time_series::{TimePoint, TimeSeriesKind};

    #[test]
    fn should_use_nearest_sample_value() {
        let samples = TimeSeries::new(
            vec![
                TimePoint::new(0.0, 1.0),
                TimePoint::new(1.0, 2.0),
                TimePoint::new(2.0, 4.0),
            ],
            TimeSeriesKind::CongestionWindow,
        );
        let losses = [LossEvent::new(900.0, None), LossEvent::new(2600.0, Some(512))];

        let markers = match_losses(&samples, &losses);

        assert_eq!(
            markers,
            vec![LossMarker::new(0.9, 2.0), LossMarker::new(2.6, 4.0)]
        );
    }

    #[test]
    fn no_samples_means_no_markers() {
        let markers = match_losses(&TimeSeries::default(), &[LossEvent::new(1.0, None)]);
        assert!(markers.is_empty());
    }
}
