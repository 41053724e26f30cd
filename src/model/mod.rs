//! Activity Model
//!
//! The in-memory copy of the server's activity collection. This is the single
//! source of truth for everything the client renders:
//!
//! - **types**: `Activity`, `ActivityDetails`, `ActivityBoard`
//! - **error**: Error types for board mutations
//!
//! Boards are never mutated in place. `with_participant` and
//! `without_participant` return a new board, and the view is re-projected
//! from whichever board is current.

pub mod error;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use types::{Activity, ActivityBoard, ActivityDetails, NO_PARTICIPANTS};
