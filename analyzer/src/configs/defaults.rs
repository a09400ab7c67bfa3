use crate::configs::analyzer::{AnalysisConfig, InputConfig, OutputConfig, SimulatorConfig};
use cwnd_report::ChartKind;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "analyzer.toml";
pub const ENV_PREFIX: &str = "CWND_ANALYZER_";

impl Default for InputConfig {
    fn default() -> InputConfig {
        InputConfig {
            cwnd_file: PathBuf::from("tcp_cwnd_data.csv"),
            loss_file: PathBuf::from("tcp_loss_data.csv"),
            series_file: PathBuf::from("output.txt"),
            skip_marker: "RxDrop".to_owned(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig {
            directory: PathBuf::from("."),
            congestion_chart: ChartKind::Congestion.default_file_stem().to_owned(),
            trend_chart: ChartKind::Trend.default_file_stem().to_owned(),
            series_chart: ChartKind::Series.default_file_stem().to_owned(),
            html: true,
            json_report: true,
            open_charts: true,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> SimulatorConfig {
        SimulatorConfig {
            seed: None,
            points: 500,
            start_ms: 1000.0,
            end_ms: 20000.0,
            initial_window: 1.0,
            slow_start_threshold: 16.0,
            growth_factor: 1.4,
            additive_increase: 0.8,
            loss_probability: 0.02,
            loss_floor: 8.0,
            backoff_factor: 0.5,
            min_window: 1.0,
            max_window: 64.0,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> AnalysisConfig {
        AnalysisConfig {
            phase_split_ratio: 0.3,
            polynomial_degree: 3,
            polynomial_min_points: 11,
            moving_average_max_window: 50,
            moving_average_divisor: 10,
            histogram_bins: 20,
        }
    }
}
