//! HTTP API Client
//!
//! Functions for communicating with the activities REST API. Errors come back
//! as the text to show the user: the server's `detail` when it sent one,
//! otherwise the action's generic failure text.

use activities::client::{parse_detail, ActivityRoutes, MessageResponse};
use activities::controller::rules::{
    failure_text, LOAD_ERROR, LOAD_FAILED, SIGNUP_FAILED, UNREGISTER_FAILED,
};
use activities::ActivityBoard;
use gloo_net::http::{Request, Response};

/// Local storage key holding an alternative server root
const API_ROOT_KEY: &str = "activities_api_root";

/// Get the server root from local storage; empty means same origin
pub fn get_api_root() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_ROOT_KEY).ok().flatten())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

fn routes() -> ActivityRoutes {
    ActivityRoutes::new(&get_api_root())
}

/// Fetch the whole board
pub async fn fetch_activities() -> Result<ActivityBoard, String> {
    let response = Request::get(&routes().list())
        .send()
        .await
        .map_err(|e| failure_text(Some(e.to_string().as_str()), LOAD_ERROR))?;

    if !response.ok() {
        return Err(LOAD_FAILED.to_string());
    }

    response
        .json()
        .await
        .map_err(|e| failure_text(Some(e.to_string().as_str()), LOAD_ERROR))
}

/// Register `email` for `activity`
pub async fn signup(activity: &str, email: &str) -> Result<MessageResponse, String> {
    let response = Request::post(&routes().signup(activity, email))
        .send()
        .await
        .map_err(|_| SIGNUP_FAILED.to_string())?;

    message_body(response, SIGNUP_FAILED).await
}

/// Remove `email` from `activity`
pub async fn unregister(activity: &str, email: &str) -> Result<MessageResponse, String> {
    let response = Request::delete(&routes().participant(activity, email))
        .send()
        .await
        .map_err(|_| UNREGISTER_FAILED.to_string())?;

    message_body(response, UNREGISTER_FAILED).await
}

async fn message_body(response: Response, fallback: &str) -> Result<MessageResponse, String> {
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        let detail = parse_detail(&body);
        return Err(failure_text(detail.as_deref(), fallback));
    }

    Ok(serde_json::from_str(&body).unwrap_or_default())
}
