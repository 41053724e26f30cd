//! Message Area Component
//!
//! The `#message` element: hidden until an action posts a message.

use leptos::*;

use crate::state::global::GlobalState;

/// Status message area
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let class = move || {
        state.message.with(|slot| match slot.current() {
            Some(m) => format!("message {}", m.kind),
            None => "message hidden".to_string(),
        })
    };

    let text = move || {
        state
            .message
            .with(|slot| slot.current().map(|m| m.text.clone()).unwrap_or_default())
    };

    view! {
        <div id="message" class=class>{text}</div>
    }
}
