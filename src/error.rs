//! Failures of a predictions fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused connection, reset)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// The body was not a valid predictions payload
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Request { .. } => "request",
            FetchError::Parse(_) => "parse",
        }
    }
}
