//! App Root Component
//!
//! Provides the page state, loads the board on mount and lays out the page.

use leptos::*;

use crate::components::{ActivityList, SignupForm, Toast};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::sync;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    spawn_local(sync::load(state));

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <Toast />
            </section>
        </main>

        <Footer />
    }
}

/// Footer showing when the board was last fetched
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer>
            {move || {
                if state.board.with(|b| b.is_empty()) {
                    "Not loaded".to_string()
                } else {
                    let fetched = state.board.with(|b| b.fetched_at());
                    format!(
                        "Last refreshed: {}",
                        fetched.with_timezone(&chrono::Local).format("%H:%M:%S")
                    )
                }
            }}
        </footer>
    }
}
