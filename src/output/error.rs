use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write results: {0}")]
    Write(#[from] std::io::Error),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for OutputError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        OutputError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for OutputError {
    fn from(value: image::ImageError) -> Self {
        OutputError::Plot(value.to_string())
    }
}
