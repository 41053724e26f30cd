//! Signup Form Component
//!
//! `#signup-form` with the `#email` input and the `#activity` select. The
//! select options are derived from the board on every change.

use activities::view::SELECT_PLACEHOLDER;
use leptos::*;

use crate::state::global::GlobalState;
use crate::state::sync;

/// Signup form
#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        spawn_local(async move {
            sync::submit(state).await;
            set_submitting.set(false);
        });
    };

    let names = move || state.board.with(|b| b.names().into_iter().map(String::from).collect::<Vec<_>>());

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    on:change=move |ev| state.selected.set(event_target_value(&ev))
                    prop:value=move || state.selected.get()
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        names()
                            .into_iter()
                            .map(|name| {
                                let selected = state.selected.get_untracked() == name;
                                view! {
                                    <option value=name.clone() selected=selected>{name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit" disabled=move || submitting.get()>"Sign Up"</button>
        </form>
    }
}
