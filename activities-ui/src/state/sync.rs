//! Page Actions
//!
//! Load, signup and unregister for the browser. Each action is one error
//! boundary: whatever fails ends up in the message area.

use activities::controller::rules::{signup_success_text, unregistered_text};
use activities::{ReconcileStrategy, SignupRequest};
use leptos::*;

use super::global::GlobalState;
use crate::api;

/// Replace the board with the server's; keep the old one on failure
pub async fn load(state: GlobalState) {
    state.loading.set(true);

    match api::fetch_activities().await {
        Ok(board) => state.board.set(board),
        Err(text) => {
            web_sys::console::warn_1(&format!("Loading activities failed: {}", text).into());
            state.show_error(&text);
        }
    }

    state.loading.set(false);
}

/// Submit the signup form
pub async fn submit(state: GlobalState) {
    let request = match SignupRequest::validate(&state.selected.get_untracked(), &state.email.get_untracked()) {
        Ok(request) => request,
        Err(text) => {
            state.show_error(text);
            return;
        }
    };

    let response = match api::signup(&request.activity, &request.email).await {
        Ok(response) => response,
        Err(text) => {
            state.show_error(&text);
            return;
        }
    };

    state.show_success(&signup_success_text(response.message.as_deref()));

    match state.strategy {
        ReconcileStrategy::Patch => {
            let next = state
                .board
                .with_untracked(|b| b.with_participant(&request.activity, &request.email));
            match next {
                Ok(board) => state.board.set(board),
                Err(e) => web_sys::console::warn_1(&e.to_string().into()),
            }
        }
        ReconcileStrategy::Refresh => {
            load(state).await;
            let still_listed = state.board.with_untracked(|b| b.contains(&request.activity));
            state
                .selected
                .set(if still_listed { request.activity } else { String::new() });
        }
    }

    state.email.set(String::new());
}

/// Unregister one participant and drop only that row
pub async fn unregister(state: GlobalState, activity: String, email: String) {
    if let Err(text) = api::unregister(&activity, &email).await {
        state.show_error(&text);
        return;
    }

    let next = state
        .board
        .with_untracked(|b| b.without_participant(&activity, &email));
    if let Ok(board) = next {
        state.board.set(board);
    }

    state.show_success(&unregistered_text(&email, &activity));
}
