use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot write report file")]
    Io(#[from] std::io::Error),

    #[error("Cannot serialize report")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot render chart: {0}")]
    Render(String),

    #[error("Cannot save HTML chart: {0}")]
    Html(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Render(error.to_string())
    }
}
