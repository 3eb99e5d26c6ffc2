use thiserror::Error as ThisError;

/// Failure of a market data request. Both variants are recoverable: the
/// dashboard logs them and keeps whatever it was already showing.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
