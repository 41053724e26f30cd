//! # Activities
//!
//! Client for an extracurricular activities signup service. Fetches the
//! activity board from a REST API, renders cards with participant rosters,
//! and signs participants up or unregisters them while keeping the view
//! consistent with the server.
//!
//! ## Modules
//!
//! - [`model`]: The in-memory activity board, the single source of truth
//! - [`view`]: Pure projection of the board into element trees
//! - [`message`]: Transient status messages
//! - [`client`]: REST endpoints, DTOs and the reqwest client
//! - [`controller`]: The view-sync controller driving user actions
//! - [`config`]: TOML + environment configuration
//!
//! `model`, `view`, `message`, the endpoint builders and the controller rules
//! build for every target. The HTTP client, the controller, configuration
//! and logging need the default `native` feature.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activities::client::{ActivitiesClient, ClientConfig};
//! use activities::controller::{ControllerOptions, ViewSyncController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ActivitiesClient::new(ClientConfig::default())?;
//!     let mut controller = ViewSyncController::new(client, ControllerOptions::default());
//!
//!     controller.load().await?;
//!     controller.signup("Chess Club", "student@mergington.edu").await?;
//!
//!     println!("{}", controller.render_list());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod controller;
pub mod message;
pub mod model;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use model::{Activity, ActivityBoard, ActivityDetails, ModelError, NO_PARTICIPANTS};

pub use view::{Element, Node};

pub use message::{Message, MessageKind, MessageSlot};

pub use client::{ActivityRoutes, ErrorResponse, MessageResponse};

pub use controller::{ReconcileStrategy, SignupRequest};

#[cfg(feature = "native")]
pub use message::MessageCenter;

#[cfg(feature = "native")]
pub use client::{ActivitiesClient, ActivitySource, ClientConfig, ClientError};

#[cfg(feature = "native")]
pub use controller::{ControllerOptions, LoadPhase, SyncError, ViewSyncController};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
