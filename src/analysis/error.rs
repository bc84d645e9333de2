use thiserror::Error;
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
impl AnalysisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput(reason.into())
    }
}
