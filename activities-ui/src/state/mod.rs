//! State Management
//!
//! Global page state and the actions that keep it in sync with the server.

pub mod global;
pub mod sync;

pub use global::{provide_global_state, GlobalState};
