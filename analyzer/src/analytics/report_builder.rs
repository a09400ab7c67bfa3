use super::metrics::{histogram, losses::match_losses, phases::classify_transitions, summary};
use super::time_series::processors::{
    moving_average::MovingAverageProcessor, polynomial_trend::PolynomialTrendProcessor,
    TimeSeriesProcessor,
};
use crate::configs::analyzer::AnalysisConfig;
use chrono::Utc;
use cwnd_report::{
    data_source::DataSource, loss_event::LossEvent, report::AnalysisReport,
    time_series::TimeSeries, trend::TrendAnalysis,
};
use tracing::debug;

pub struct AnalysisReportBuilder;

impl AnalysisReportBuilder {
    pub fn build(
        source: DataSource,
        samples: TimeSeries,
        loss_events: Vec<LossEvent>,
        config: &AnalysisConfig,
        identifier: String,
    ) -> AnalysisReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();

        let summary =
            summary::from_samples(&samples, loss_events.len() as u64, config.phase_split_ratio);
        let values: Vec<f64> = samples.values().collect();
        let reductions = classify_transitions(&values).reductions;
        let histogram = histogram::from_values(&values, config.histogram_bins);
        let loss_markers = match_losses(&samples, &loss_events);
        let trend = Self::trend(&samples, config);

        debug!(
            "Analyzed {} samples: {} reductions, {} loss markers",
            samples.len(),
            reductions.len(),
            loss_markers.len()
        );

        AnalysisReport {
            uuid,
            identifier,
            timestamp,
            source,
            summary,
            samples,
            loss_events,
            loss_markers,
            reductions,
            histogram,
            trend,
        }
    }

    fn trend(samples: &TimeSeries, config: &AnalysisConfig) -> TrendAnalysis {
        let polynomial = if samples.len() >= config.polynomial_min_points {
            Some(PolynomialTrendProcessor::new(config.polynomial_degree).process(samples))
                .filter(|series| !series.is_empty())
        } else {
            None
        };

        let moving_average_window = MovingAverageProcessor::window_for(
            samples.len(),
            config.moving_average_max_window,
            config.moving_average_divisor,
        );
        let moving_average = if moving_average_window > 1 {
            Some(MovingAverageProcessor::new(moving_average_window).process(samples))
        } else {
            None
        };

        TrendAnalysis {
            polynomial,
            polynomial_degree: config.polynomial_degree,
            moving_average,
            moving_average_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwnd_report::time_series::{TimePoint, TimeSeriesKind};

    fn trace(count: usize) -> TimeSeries {
        TimeSeries::new(
            (0..count)
                .map(|i| TimePoint::new(i as f64 * 0.1, (i % 16) as f64 + 1.0))
                .collect(),
            TimeSeriesKind::CongestionWindow,
        )
    }

    #[test]
    fn should_build_complete_report() {
        let losses = vec![LossEvent::new(150.0, None), LossEvent::new(900.0, Some(1448))];

        let report = AnalysisReportBuilder::build(
            DataSource::Measured,
            trace(200),
            losses,
            &AnalysisConfig::default(),
            "host".to_owned(),
        );

        let summary = report.summary.as_ref().unwrap();
        assert_eq!(summary.data_points, 200);
        assert_eq!(summary.total_losses, 2);
        assert_eq!(report.loss_markers.len(), 2);
        assert_eq!(report.reductions.len() as u64, summary.reduction_events);
        assert_eq!(report.histogram.total(), 200);
        assert_eq!(report.trend.polynomial.as_ref().unwrap().len(), 200);
        assert_eq!(report.trend.moving_average_window, 20);
        assert_eq!(report.trend.moving_average.as_ref().unwrap().len(), 181);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn short_trace_should_skip_trend() {
        let report = AnalysisReportBuilder::build(
            DataSource::Measured,
            trace(10),
            Vec::new(),
            &AnalysisConfig::default(),
            "host".to_owned(),
        );

        assert!(report.trend.polynomial.is_none());
        assert!(report.trend.moving_average.is_none());
        assert_eq!(report.trend.moving_average_window, 1);
    }

    #[test]
    fn empty_samples_should_yield_no_summary() {
        let report = AnalysisReportBuilder::build(
            DataSource::Measured,
            TimeSeries::default(),
            vec![LossEvent::new(1.0, None)],
            &AnalysisConfig::default(),
            "host".to_owned(),
        );

        assert!(report.summary.is_none());
        assert!(report.loss_markers.is_empty());
        assert!(report.histogram.is_empty());
    }
}
