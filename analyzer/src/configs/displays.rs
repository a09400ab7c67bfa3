use crate::configs::analyzer::{
    AnalysisConfig, AnalyzerConfig, InputConfig, OutputConfig, SimulatorConfig,
};
use std::fmt::{Display, Formatter};

impl Display for AnalyzerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ input: {}, output: {}, simulator: {}, analysis: {} }}",
            self.input, self.output, self.simulator, self.analysis
        )
    }
}

impl Display for InputConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ cwnd_file: {}, loss_file: {}, series_file: {}, skip_marker: {} }}",
            self.cwnd_file.display(),
            self.loss_file.display(),
            self.series_file.display(),
            self.skip_marker
        )
    }
}

impl Display for OutputConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ directory: {}, congestion_chart: {}, trend_chart: {}, series_chart: {}, html: {}, json_report: {}, open_charts: {} }}",
            self.directory.display(),
            self.congestion_chart,
            self.trend_chart,
            self.series_chart,
            self.html,
            self.json_report,
            self.open_charts
        )
    }
}

impl Display for SimulatorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let seed = self
            .seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "random".to_owned());
        write!(
            f,
            "{{ seed: {}, points: {}, span_ms: {}..{}, window: {}..{}, ssthresh: {}, loss_probability: {} }}",
            seed,
            self.points,
            self.start_ms,
            self.end_ms,
            self.min_window,
            self.max_window,
            self.slow_start_threshold,
            self.loss_probability
        )
    }
}

impl Display for AnalysisConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ phase_split_ratio: {}, polynomial_degree: {}, polynomial_min_points: {}, moving_average_max_window: {}, moving_average_divisor: {}, histogram_bins: {} }}",
            self.phase_split_ratio,
            self.polynomial_degree,
            self.polynomial_min_points,
            self.moving_average_max_window,
            self.moving_average_divisor,
            self.histogram_bins
        )
    }
}
