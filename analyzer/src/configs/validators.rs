use crate::configs::analyzer::{AnalysisConfig, AnalyzerConfig, OutputConfig, SimulatorConfig};
use crate::error::AnalyzerError;
use crate::validatable::Validatable;
use tracing::error;

impl Validatable<AnalyzerError> for AnalyzerConfig {
    fn validate(&self) -> Result<(), AnalyzerError> {
        self.simulator.validate()?;
        self.analysis.validate()?;
        self.output.validate()?;

        if self.chart.width == 0
            || self.chart.height == 0
            || self.chart.trend_width == 0
            || self.chart.trend_height == 0
        {
            error!("Chart configuration -> dimensions must be greater than zero.");
            return Err(AnalyzerError::InvalidConfiguration(
                "chart dimensions must be greater than zero".to_owned(),
            ));
        }

        if !(0.0..=1.0).contains(&self.chart.band_opacity) {
            error!("Chart configuration -> band opacity must be within [0, 1].");
            return Err(AnalyzerError::InvalidConfiguration(
                "chart band opacity must be within [0, 1]".to_owned(),
            ));
        }

        self.chart
            .validate()
            .map_err(|e| AnalyzerError::InvalidConfiguration(e.to_string()))
    }
}

impl Validatable<AnalyzerError> for SimulatorConfig {
    fn validate(&self) -> Result<(), AnalyzerError> {
        if self.points == 0 {
            error!("Simulator configuration -> points must be greater than zero.");
            return Err(AnalyzerError::InvalidConfiguration(
                "simulator points must be greater than zero".to_owned(),
            ));
        }

        if self.end_ms <= self.start_ms {
            error!("Simulator configuration -> end_ms must be greater than start_ms.");
            return Err(AnalyzerError::InvalidConfiguration(
                "simulator end_ms must be greater than start_ms".to_owned(),
            ));
        }

        if !(0.0..=1.0).contains(&self.loss_probability) {
            error!("Simulator configuration -> loss probability must be within [0, 1].");
            return Err(AnalyzerError::InvalidConfiguration(
                "simulator loss probability must be within [0, 1]".to_owned(),
            ));
        }

        if self.min_window <= 0.0 || self.max_window < self.min_window {
            error!("Simulator configuration -> window bounds must satisfy 0 < min_window <= max_window.");
            return Err(AnalyzerError::InvalidConfiguration(
                "simulator window bounds must satisfy 0 < min_window <= max_window".to_owned(),
            ));
        }

        if !(self.min_window..=self.max_window).contains(&self.initial_window) {
            error!("Simulator configuration -> initial window must lie within the window bounds.");
            return Err(AnalyzerError::InvalidConfiguration(
                "simulator initial window must lie within the window bounds".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Validatable<AnalyzerError> for AnalysisConfig {
    fn validate(&self) -> Result<(), AnalyzerError> {
        if !(self.phase_split_ratio > 0.0 && self.phase_split_ratio < 1.0) {
            error!("Analysis configuration -> phase split ratio must be within (0, 1).");
            return Err(AnalyzerError::InvalidConfiguration(
                "phase split ratio must be within (0, 1)".to_owned(),
            ));
        }

        if self.histogram_bins == 0 {
            error!("Analysis configuration -> histogram bins must be greater than zero.");
            return Err(AnalyzerError::InvalidConfiguration(
                "histogram bins must be greater than zero".to_owned(),
            ));
        }

        if self.moving_average_max_window == 0 || self.moving_average_divisor == 0 {
            error!("Analysis configuration -> moving average window and divisor must be greater than zero.");
            return Err(AnalyzerError::InvalidConfiguration(
                "moving average window and divisor must be greater than zero".to_owned(),
            ));
        }

        if self.polynomial_min_points <= self.polynomial_degree {
            error!("Analysis configuration -> polynomial fit needs more points than its degree.");
            return Err(AnalyzerError::InvalidConfiguration(
                "polynomial_min_points must be greater than polynomial_degree".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Validatable<AnalyzerError> for OutputConfig {
    fn validate(&self) -> Result<(), AnalyzerError> {
        for name in [&self.congestion_chart, &self.trend_chart, &self.series_chart] {
            if name.is_empty() || name.contains(['/', '\\']) {
                error!("Output configuration -> invalid chart file name: '{name}'.");
                return Err(AnalyzerError::InvalidConfiguration(format!(
                    "invalid chart file name: '{name}'"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_should_be_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn should_reject_empty_simulation() {
        let mut config = AnalyzerConfig::default();
        config.simulator.points = 0;
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn should_reject_reversed_span() {
        let mut config = AnalyzerConfig::default();
        config.simulator.end_ms = config.simulator.start_ms;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_out_of_range_ratio() {
        let mut config = AnalyzerConfig::default();
        config.analysis.phase_split_ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_bad_color() {
        let mut config = AnalyzerConfig::default();
        config.chart.loss_color = "pink".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_chart_name_with_path_separator() {
        let mut config = AnalyzerConfig::default();
        config.output.trend_chart = "../trend".to_owned();
        assert!(config.validate().is_err());
    }
}
