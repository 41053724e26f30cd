//! Global Page State
//!
//! Reactive state management using Leptos signals. The board signal is the
//! only copy of the activity data; cards and select options are derived
//! from it.

use activities::message::DEFAULT_MESSAGE_TIMEOUT_MS;
use activities::{ActivityBoard, Message, MessageSlot, ReconcileStrategy};
use leptos::*;

/// Local storage key choosing the post-signup reconciliation
const RECONCILE_KEY: &str = "activities_reconcile";

/// Global page state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Activities as last received from the server
    pub board: RwSignal<ActivityBoard>,
    /// A load is in flight
    pub loading: RwSignal<bool>,
    /// Value of the `#activity` select
    pub selected: RwSignal<String>,
    /// Value of the `#email` input
    pub email: RwSignal<String>,
    /// The `#message` area
    pub message: RwSignal<MessageSlot>,
    /// How a successful signup is reflected
    pub strategy: ReconcileStrategy,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        board: create_rw_signal(ActivityBoard::empty()),
        loading: create_rw_signal(false),
        selected: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        message: create_rw_signal(MessageSlot::new()),
        strategy: stored_strategy(),
    };

    provide_context(state);
}

/// Reconcile strategy from local storage, default otherwise
fn stored_strategy() -> ReconcileStrategy {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(RECONCILE_KEY).ok().flatten());
    parse_strategy(stored.as_deref())
}

fn parse_strategy(value: Option<&str>) -> ReconcileStrategy {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

impl GlobalState {
    /// Show a message; it hides itself unless a newer one replaced it first
    pub fn show(&self, message: Message) {
        let generation = self.message.try_update(|slot| slot.post(message)).unwrap_or(0);

        let slot = self.message;
        gloo_timers::callback::Timeout::new(DEFAULT_MESSAGE_TIMEOUT_MS as u32, move || {
            slot.update(|s| {
                s.dismiss(generation);
            });
        })
        .forget();
    }

    pub fn show_success(&self, text: &str) {
        self.show(Message::success(text));
    }

    pub fn show_error(&self, text: &str) {
        self.show(Message::error(text));
    }
}
