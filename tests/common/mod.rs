//! Stub activities server for integration tests
//!
//! Mimics the real API: activity names in the path, emails in the query,
//! `{"detail": ...}` bodies on errors.

#![allow(dead_code)]

use activities::{Activity, ActivityBoard};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Activity whose write endpoints answer 500 with a plain-text body
pub const BROKEN_ACTIVITY: &str = "Broken";

pub type SharedBoard = Arc<Mutex<ActivityBoard>>;

#[derive(Deserialize)]
struct EmailParam {
    email: String,
}

pub fn school_board() -> ActivityBoard {
    ActivityBoard::new(vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .participant("michael@mergington.edu")
        .participant("daniel@mergington.edu"),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .participant("emma@mergington.edu"),
        Activity::new("Art Club", "Painting and drawing", "Thursdays, 3:30 PM - 5:00 PM", 1),
        Activity::new("Math Olympiad", "Competition math", "Wednesdays, 4:00 PM", 1)
            .participant("olivia@mergington.edu"),
    ])
}

/// Start the stub on an ephemeral port; returns its root URL and state
pub async fn spawn_server(board: ActivityBoard) -> (String, SharedBoard) {
    let state: SharedBoard = Arc::new(Mutex::new(board));

    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/participants", delete(unregister))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

/// A root URL nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn detail(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "detail": text }))).into_response()
}

async fn list_activities(State(state): State<SharedBoard>) -> Json<ActivityBoard> {
    Json(state.lock().unwrap().clone())
}

async fn signup(
    State(state): State<SharedBoard>,
    Path(name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Response {
    if name == BROKEN_ACTIVITY {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }

    let mut board = state.lock().unwrap();
    let Some(activity) = board.get(&name) else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if activity.has_participant(&params.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }
    if activity.spots_left() == 0 {
        return detail(StatusCode::BAD_REQUEST, "Activity full");
    }

    *board = board.with_participant(&name, &params.email).unwrap();
    Json(json!({ "message": format!("Signed up {} for {}", params.email, name) })).into_response()
}

async fn unregister(
    State(state): State<SharedBoard>,
    Path(name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Response {
    if name == BROKEN_ACTIVITY {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }

    let mut board = state.lock().unwrap();
    if !board.contains(&name) {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    }
    match board.without_participant(&name, &params.email) {
        Ok(next) => {
            *board = next;
            Json(json!({ "message": format!("Unregistered {} from {}", params.email, name) }))
                .into_response()
        }
        Err(_) => detail(StatusCode::NOT_FOUND, "Student is not signed up for this activity"),
    }
}
