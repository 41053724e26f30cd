//! Request/Response DTOs
//!
//! Bodies exchanged with the activities API besides the board itself.

use serde::{Deserialize, Serialize};

/// Success body of signup and unregister
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of any non-success response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Extract `detail` from an error body, if it has one
pub fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.detail)
        .filter(|d| !d.is_empty())
}
