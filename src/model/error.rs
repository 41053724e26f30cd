//! Model error types

use thiserror::Error;

/// Errors raised when deriving a new board from an existing one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// No activity with this name is on the board
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    /// The email is not on the activity's roster
    #[error("{email} is not registered for {activity}")]
    UnknownParticipant { activity: String, email: String },
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
