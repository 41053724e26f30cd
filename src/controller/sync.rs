//! View-Sync Controller
//!
//! Owns the current board, the signup form and the status message, and
//! mediates every user action against an `ActivitySource`. Each public
//! action is one error boundary: failures become the visible message and are
//! also returned so a caller can pick an exit code.

use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use super::error::{SyncError, SyncResult};
use super::rules::{
    failure_text, signup_success_text, unregistered_text, ReconcileStrategy, SignupRequest,
    LOAD_ERROR, LOAD_FAILED, SIGNUP_FAILED, UNREGISTER_FAILED,
};
use crate::client::{ActivitySource, ClientError};
use crate::message::{Message, MessageCenter, MessageKind, DEFAULT_MESSAGE_TIMEOUT_MS};
use crate::model::ActivityBoard;
use crate::view::{self, Element};

/// Where the controller is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet
    Idle,
    /// A load is in flight
    Loading,
    /// The board reflects the last successful load
    Rendered,
    /// The last load failed; the previous board (possibly empty) is still shown
    Error,
}

/// Contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Selected activity, empty for the placeholder option
    pub activity: String,
    /// Raw email input
    pub email: String,
}

/// Controller tuning
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub strategy: ReconcileStrategy,
    pub message_timeout: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            strategy: ReconcileStrategy::default(),
            message_timeout: Duration::from_millis(DEFAULT_MESSAGE_TIMEOUT_MS),
        }
    }
}

/// Keeps the rendered view consistent with the server
pub struct ViewSyncController<S> {
    source: S,
    board: ActivityBoard,
    phase: LoadPhase,
    form: SignupForm,
    messages: MessageCenter,
    strategy: ReconcileStrategy,
}

impl<S: ActivitySource> ViewSyncController<S> {
    pub fn new(source: S, options: ControllerOptions) -> Self {
        Self {
            source,
            board: ActivityBoard::empty(),
            phase: LoadPhase::Idle,
            form: SignupForm::default(),
            messages: MessageCenter::new(options.message_timeout),
            strategy: options.strategy,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn board(&self) -> &ActivityBoard {
        &self.board
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn strategy(&self) -> ReconcileStrategy {
        self.strategy
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// Change the select control
    pub fn select_activity(&mut self, activity: impl Into<String>) {
        self.form.activity = activity.into();
    }

    /// Change the email input
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// The status message currently visible
    pub fn current_message(&self) -> Option<Message> {
        self.messages.current()
    }

    /// Show a transient message, replacing any previous one and its timer.
    ///
    /// Auto-dismissal needs a tokio runtime; without one the message stays
    /// until replaced.
    pub fn message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.messages.show(Message::new(text, kind));
    }

    /// Fetch the whole board and replace the current one.
    ///
    /// On failure the previous board stays in place.
    pub async fn load(&mut self) -> SyncResult<()> {
        let span = tracing::info_span!("load", action_id = %Uuid::new_v4());
        self.phase = LoadPhase::Loading;

        match self.source.fetch_activities().instrument(span.clone()).await {
            Ok(board) => {
                span.in_scope(|| tracing::info!(activities = board.len(), "Loaded activities"));
                self.board = board;
                self.phase = LoadPhase::Rendered;
                Ok(())
            }
            Err(e) => {
                span.in_scope(|| tracing::warn!(error = %e, "Failed to load activities"));
                let text = match &e {
                    ClientError::Api { .. } => LOAD_FAILED.to_string(),
                    other => failure_text(Some(other.to_string().as_str()), LOAD_ERROR),
                };
                self.message(text, MessageKind::Error);
                self.phase = LoadPhase::Error;
                Err(e.into())
            }
        }
    }

    /// Register `email` for `activity` and reconcile the board
    pub async fn signup(&mut self, activity: &str, email: &str) -> SyncResult<()> {
        let span = tracing::info_span!("signup", action_id = %Uuid::new_v4(), activity = %activity);

        let request = match SignupRequest::validate(activity, email) {
            Ok(request) => request,
            Err(text) => {
                span.in_scope(|| tracing::debug!("Signup rejected by validation"));
                self.message(text, MessageKind::Error);
                return Err(SyncError::Validation(text.to_string()));
            }
        };

        let response = match self
            .source
            .signup(&request.activity, &request.email)
            .instrument(span.clone())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                span.in_scope(|| tracing::warn!(error = %e, "Signup failed"));
                self.message(failure_text(e.detail(), SIGNUP_FAILED), MessageKind::Error);
                return Err(e.into());
            }
        };

        let text = signup_success_text(response.message.as_deref());
        self.message(text, MessageKind::Success);

        match self.strategy {
            ReconcileStrategy::Patch => {
                match self.board.with_participant(&request.activity, &request.email) {
                    Ok(next) => self.board = next,
                    Err(e) => span.in_scope(|| tracing::warn!(error = %e, "No card to patch")),
                }
            }
            ReconcileStrategy::Refresh => {
                // A failed reload has already replaced the success message
                if let Err(e) = self.load().instrument(span.clone()).await {
                    span.in_scope(|| tracing::debug!(error = %e, "Reload after signup failed"));
                }
                self.form.activity = if self.board.contains(&request.activity) {
                    request.activity.clone()
                } else {
                    String::new()
                };
            }
        }

        self.form.email.clear();
        span.in_scope(|| tracing::info!(strategy = %self.strategy, "Signed up"));
        Ok(())
    }

    /// Run signup with the current form contents
    pub async fn submit(&mut self) -> SyncResult<()> {
        let SignupForm { activity, email } = self.form.clone();
        self.signup(&activity, &email).await
    }

    /// Remove `email` from `activity`; only that roster row changes
    pub async fn unregister(&mut self, activity: &str, email: &str) -> SyncResult<()> {
        let span = tracing::info_span!("unregister", action_id = %Uuid::new_v4(), activity = %activity);

        if let Err(e) = self
            .source
            .unregister(activity, email)
            .instrument(span.clone())
            .await
        {
            span.in_scope(|| tracing::warn!(error = %e, "Unregister failed"));
            self.message(failure_text(e.detail(), UNREGISTER_FAILED), MessageKind::Error);
            return Err(e.into());
        }

        match self.board.without_participant(activity, email) {
            Ok(next) => self.board = next,
            // Already gone locally, e.g. a second click that the server accepted
            Err(e) => span.in_scope(|| tracing::debug!(error = %e, "Nothing to remove locally")),
        }

        self.message(unregistered_text(email, activity), MessageKind::Success);
        span.in_scope(|| tracing::info!("Unregistered"));
        Ok(())
    }

    /// `#activities-list` for the current board
    pub fn render_list(&self) -> Element {
        view::render_activity_list(&self.board)
    }

    /// One card, if the activity is on the board
    pub fn render_card(&self, activity: &str) -> Option<Element> {
        self.board.get(activity).map(view::render_card)
    }

    /// `#activity` select reflecting the form selection
    pub fn render_select(&self) -> Element {
        view::render_select(&self.board, &self.form.activity)
    }

    /// `#message` area
    pub fn render_message(&self) -> Element {
        view::render_message(self.current_message().as_ref())
    }
}
