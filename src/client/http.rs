//! Activities REST Client
//!
//! reqwest-backed implementation of `ActivitySource`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::dto::{parse_detail, MessageResponse};
use super::endpoints::ActivityRoutes;
use super::error::{ClientError, ClientResult};
use super::ActivitySource;
use crate::model::ActivityBoard;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. "http://localhost:8000"
    pub base_url: String,
    /// Transport timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// HTTP client for the activities API
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    client: Client,
    routes: ActivityRoutes,
    config: ClientConfig,
}

impl ActivitiesClient {
    /// Create a client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            routes: ActivityRoutes::new(&config.base_url),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn routes(&self) -> &ActivityRoutes {
        &self.routes
    }

    /// Turn a non-success response into `ClientError::Api`
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = parse_detail(&body);
        tracing::debug!(status = status.as_u16(), body = %body, "API returned error");

        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    async fn message_body(response: Response) -> ClientResult<MessageResponse> {
        let text = response.text().await.map_err(ClientError::from_send)?;
        if text.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ActivitySource for ActivitiesClient {
    async fn fetch_activities(&self) -> ClientResult<ActivityBoard> {
        let url = self.routes.list();
        tracing::debug!(url = %url, "Fetching activities");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;

        let text = response.text().await.map_err(ClientError::from_send)?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        let url = self.routes.signup(activity, email);
        tracing::debug!(url = %url, "Signing up");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        Self::message_body(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        let url = self.routes.participant(activity, email);
        tracing::debug!(url = %url, "Unregistering");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check(response).await?;
        Self::message_body(response).await
    }
}
