use super::data_source::DataSource;
use super::histogram::Histogram;
use super::loss_event::{LossEvent, LossMarker};
use super::summary::SummaryStats;
use super::time_series::TimeSeries;
use super::trend::TrendAnalysis;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    /// Analysis run unique identifier
    pub uuid: Uuid,

    /// Machine or user supplied identifier
    pub identifier: String,

    /// Timestamp when the analysis was finished
    pub timestamp: String,

    /// Origin of the samples
    pub source: DataSource,

    /// None when there are no samples
    pub summary: Option<SummaryStats>,

    pub samples: TimeSeries,

    pub loss_events: Vec<LossEvent>,

    pub loss_markers: Vec<LossMarker>,

    /// Index of the first sample of every pair where the window shrank
    pub reductions: Vec<usize>,

    pub histogram: Histogram,

    pub trend: TrendAnalysis,
}

impl AnalysisReport {
    pub fn dump_to_json(&self, output_dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join("report.json");
        let report_json = serde_json::to_string(self)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_series::{TimePoint, TimeSeriesKind};

    #[test]
    fn should_dump_report_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let report = AnalysisReport {
            source: DataSource::Simulated,
            samples: TimeSeries::new(
                vec![TimePoint::new(1.0, 1.0), TimePoint::new(2.0, 1.4)],
                TimeSeriesKind::CongestionWindow,
            ),
            loss_events: vec![LossEvent::new(1500.0, Some(1040))],
            ..Default::default()
        };

        let path = report.dump_to_json(&dir.path().join("out")).unwrap();
        let json = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "simulated");
        assert_eq!(value["samples"]["points"].as_array().unwrap().len(), 2);
        assert_eq!(value["loss_events"][0]["packet_size"], 1040);
    }
}
