//! Remote Layer - Errors
//!
//! Transport failures, non-success responses and undecodable bodies are
//! all the same kind of failure to the store.

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// A remote operation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    detail: String,
}

impl RemoteError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Remote operation failed: {}", self.detail)
    }
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RemoteError::new(format!("{} ({})", status, err)),
            None => RemoteError::new(err.to_string()),
        }
    }
}
