//! Controller error types

use thiserror::Error;

use crate::client::ClientError;

/// Errors surfaced by a user action or load cycle
///
/// By the time a caller sees one of these, the controller has already turned
/// it into the visible status message.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Missing email or activity selection; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The request failed in transport or the server refused it
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SyncError {
    /// Server-provided detail, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            SyncError::Client(e) => e.detail(),
            SyncError::Validation(_) => None,
        }
    }
}

/// Result type for controller actions
pub type SyncResult<T> = Result<T, SyncError>;
