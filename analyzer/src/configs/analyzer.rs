use cwnd_report::ChartStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub simulator: SimulatorConfig,
    pub analysis: AnalysisConfig,
    pub chart: ChartStyle,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub cwnd_file: PathBuf,
    pub loss_file: PathBuf,
    pub series_file: PathBuf,
    /// Lines of the generic series file containing this token are skipped.
    pub skip_marker: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub congestion_chart: String,
    pub trend_chart: String,
    pub series_chart: String,
    pub html: bool,
    pub json_report: bool,
    pub open_charts: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Random seed, a fresh one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    pub points: usize,
    pub start_ms: f64,
    pub end_ms: f64,
    pub initial_window: f64,
    pub slow_start_threshold: f64,
    pub growth_factor: f64,
    pub additive_increase: f64,
    pub loss_probability: f64,
    /// Losses only strike once the window is above this value.
    pub loss_floor: f64,
    pub backoff_factor: f64,
    pub min_window: f64,
    pub max_window: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fraction of the maximum window separating the slow start band from the congestion avoidance band.
    pub phase_split_ratio: f64,
    pub polynomial_degree: usize,
    pub polynomial_min_points: usize,
    pub moving_average_max_window: usize,
    pub moving_average_divisor: usize,
    pub histogram_bins: usize,
}
