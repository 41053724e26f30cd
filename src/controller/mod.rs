//! View-Sync Controller
//!
//! Loads the board, mediates signup and unregister, and keeps the rendered
//! view consistent with the server.
//!
//! ```text
//! load:        fetch → replace board → re-project
//! signup:      validate → POST → message → patch board | reload + reselect
//! unregister:  DELETE → remove one roster row → message
//! ```
//!
//! `rules` is shared with the browser UI; the controller itself needs the
//! `native` feature.

pub mod rules;

#[cfg(feature = "native")]
mod error;
#[cfg(feature = "native")]
mod sync;

pub use rules::{ReconcileStrategy, SignupRequest};

#[cfg(feature = "native")]
pub use error::{SyncError, SyncResult};
#[cfg(feature = "native")]
pub use sync::{ControllerOptions, LoadPhase, SignupForm, ViewSyncController};
