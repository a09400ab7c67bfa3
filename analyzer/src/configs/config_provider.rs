use crate::configs::analyzer::AnalyzerConfig;
use crate::configs::defaults::{DEFAULT_CONFIG_PATH, ENV_PREFIX};
use crate::error::AnalyzerError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::info;

pub trait ConfigProvider {
    fn load_config(&self) -> Result<AnalyzerConfig, AnalyzerError>;
}

/// Layers built-in defaults, an optional TOML file and `CWND_ANALYZER_*` environment variables.
#[derive(Debug)]
pub struct FileConfigProvider {
    path: Option<PathBuf>,
    env_prefix: String,
}

impl FileConfigProvider {
    /// An explicit `path` must exist; without one, `analyzer.toml` is used when present.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            env_prefix: ENV_PREFIX.to_owned(),
        }
    }

    #[cfg(test)]
    fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_owned();
        self
    }

    fn resolve_path(&self) -> Result<Option<PathBuf>, AnalyzerError> {
        match &self.path {
            Some(path) if !path.exists() => Err(AnalyzerError::CannotLoadConfiguration(format!(
                "Cannot find configuration file at path: '{}'.",
                path.display()
            ))),
            Some(path) => Ok(Some(path.clone())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                Ok(default_path.exists().then(|| default_path.to_path_buf()))
            }
        }
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<AnalyzerConfig, AnalyzerError> {
        let config_builder = Figment::from(Serialized::defaults(AnalyzerConfig::default()));

        let config_builder = match self.resolve_path()? {
            Some(path) => {
                info!("Loading config from path: '{}'...", path.display());
                config_builder.merge(Toml::file(path))
            }
            None => {
                info!("No config file found, using built-in defaults.");
                config_builder
            }
        };

        let config_result: Result<AnalyzerConfig, figment::Error> = config_builder
            .merge(Env::prefixed(&self.env_prefix).split("__"))
            .extract();

        config_result.map_err(|figment_error| {
            AnalyzerError::CannotLoadConfiguration(format!(
                "Failed to load configuration: {}",
                figment_error
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_ENV_PREFIX: &str = "CWND_ANALYZER_CONFIG_PROVIDER_TEST_";

    #[test]
    fn should_override_defaults_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r##"
[simulator]
seed = 42
points = 100

[analysis]
histogram_bins = 10

[chart]
loss_color = "#FF0000"
"##
        )
        .unwrap();

        let config = FileConfigProvider::new(Some(file.path().to_path_buf()))
            .with_env_prefix(TEST_ENV_PREFIX)
            .load_config()
            .unwrap();

        assert_eq!(config.simulator.seed, Some(42));
        assert_eq!(config.simulator.points, 100);
        assert_eq!(config.simulator.max_window, 64.0);
        assert_eq!(config.analysis.histogram_bins, 10);
        assert_eq!(config.analysis.phase_split_ratio, 0.3);
        assert_eq!(config.chart.loss_color, "#FF0000");
        assert_eq!(config.input.cwnd_file, PathBuf::from("tcp_cwnd_data.csv"));
    }

    #[test]
    fn environment_should_override_default_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_PATH,
                r##"
[simulator]
seed = 42
points = 100

[chart]
loss_color = "#FF0000"
"##,
            )?;
            jail.set_env("CWND_ANALYZER_SIMULATOR__SEED", 7);
            jail.set_env("CWND_ANALYZER_OUTPUT__OPEN_CHARTS", false);
            jail.set_env("CWND_ANALYZER_ANALYSIS__HISTOGRAM_BINS", 12);

            let config = FileConfigProvider::new(None)
                .load_config()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.simulator.seed, Some(7));
            assert_eq!(config.simulator.points, 100);
            assert!(!config.output.open_charts);
            assert_eq!(config.analysis.histogram_bins, 12);
            assert_eq!(config.chart.loss_color, "#FF0000");
            Ok(())
        });
    }

    #[test]
    fn should_fail_for_missing_explicit_file() {
        let result = FileConfigProvider::new(Some(PathBuf::from("/nonexistent/analyzer.toml")))
            .load_config();
        assert!(matches!(
            result,
            Err(AnalyzerError::CannotLoadConfiguration(_))
        ));
    }

    #[test]
    fn should_fail_for_mistyped_value() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[simulator]\npoints = \"many\"").unwrap();

        let result = FileConfigProvider::new(Some(file.path().to_path_buf()))
            .with_env_prefix(TEST_ENV_PREFIX)
            .load_config();
        assert!(result.is_err());
    }
}
