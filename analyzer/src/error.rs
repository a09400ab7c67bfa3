use cwnd_report::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No usable series data in '{0}'")]
    NoData(String),

    #[error("Cannot initialize logging: {0}")]
    Logging(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Report error")]
    Report(#[from] ReportError),
}
