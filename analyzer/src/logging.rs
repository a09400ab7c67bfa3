use crate::error::AnalyzerError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_LOG_FILE_NAME: &str = "cwnd-analyzer.log";

pub(crate) struct Logging {
    file_guard: Option<WorkerGuard>,
}

impl Logging {
    pub(crate) fn new() -> Self {
        Logging { file_guard: None }
    }

    /// Stdout logging honors `RUST_LOG` (default `info`); `quiet` silences it.
    /// When `log_file` is set, everything down to `TRACE` is also written there.
    pub(crate) fn init(
        &mut self,
        quiet: bool,
        log_file: &Option<PathBuf>,
    ) -> Result<&mut Self, AnalyzerError> {
        let mut layers = vec![];

        let stdout_layer = if quiet {
            fmt::layer().with_filter(LevelFilter::OFF).boxed()
        } else {
            fmt::layer()
                .with_target(false)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .boxed()
        };
        layers.push(stdout_layer);

        if let Some(file_path) = log_file {
            let _ = std::fs::remove_file(file_path);
            let directory = file_path.parent().unwrap_or_else(|| Path::new(""));
            let file_name = file_path
                .file_name()
                .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::TRACE)
                .boxed();
            self.file_guard = Some(file_guard);

            layers.push(file_layer);
        }

        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|e| AnalyzerError::Logging(e.to_string()))?;

        Ok(self)
    }
}
