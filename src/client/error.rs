//! Client error types

use thiserror::Error;

/// Errors from talking to the activities API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, reset
    #[error("Network error: {0}")]
    Network(String),

    /// The transport timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// Non-success status; `detail` is the server's explanation if the body had one
    #[error("API error {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// A success response whose body did not decode
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other reqwest failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Classify a reqwest send error
    pub fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Network(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }

    /// Server-provided detail, if this was an API error that carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True for failures that never reached a server response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_) | ClientError::Timeout | ClientError::Request(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
