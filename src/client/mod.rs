//! Activities API Client
//!
//! Everything needed to talk to the activities REST API:
//!
//! - `GET /activities` - the full board
//! - `POST /activities/{name}/signup?email={email}` - register a participant
//! - `DELETE /activities/{name}/participants?email={email}` - unregister one
//!
//! `endpoints` and `dto` compile for every target so the browser UI can reuse
//! them. The reqwest client and the `ActivitySource` trait need the `native`
//! feature.

pub mod dto;
pub mod endpoints;

pub use dto::{parse_detail, ErrorResponse, MessageResponse};
pub use endpoints::{ActivityRoutes, ACTIVITIES_PATH};

#[cfg(feature = "native")]
mod error;
#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use http::{ActivitiesClient, ClientConfig};

#[cfg(feature = "native")]
use crate::model::ActivityBoard;

/// Remote source of activity data
///
/// The controller only talks to the server through this trait, so tests can
/// substitute an in-memory source.
#[cfg(feature = "native")]
#[async_trait::async_trait]
pub trait ActivitySource: Send + Sync {
    /// Read the full activity collection
    async fn fetch_activities(&self) -> ClientResult<ActivityBoard>;

    /// Register `email` for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse>;
}

#[cfg(feature = "native")]
#[async_trait::async_trait]
impl<T: ActivitySource + ?Sized> ActivitySource for std::sync::Arc<T> {
    async fn fetch_activities(&self) -> ClientResult<ActivityBoard> {
        (**self).fetch_activities().await
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        (**self).signup(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        (**self).unregister(activity, email).await
    }
}
