//! Activity Card Components
//!
//! One card per activity with its participant roster. Cards are keyed by
//! activity name plus roster, so a roster change re-renders only that card.

use activities::{Activity, NO_PARTICIPANTS};
use leptos::*;

use crate::state::global::GlobalState;
use crate::state::sync;

/// The `#activities-list` container
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let activities = move || state.board.with(|b| b.iter().cloned().collect::<Vec<_>>());

    view! {
        <div id="activities-list">
            {move || {
                if state.loading.get() && state.board.with(|b| b.is_empty()) {
                    view! { <p>"Loading activities..."</p> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
            <For
                each=activities
                key=|activity| card_key(activity)
                children=move |activity| view! { <ActivityCard activity=activity /> }
            />
        </div>
    }
}

/// Key that changes whenever the card's content does
fn card_key(activity: &Activity) -> String {
    format!("{}|{}", activity.name, activity.participants.join(","))
}

/// A single activity card
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let name = activity.name.clone();
    let roster = if activity.participants.is_empty() {
        view! {
            <li><span class="participant-badge">{NO_PARTICIPANTS}</span></li>
        }
        .into_view()
    } else {
        activity
            .participants
            .iter()
            .map(|email| {
                view! { <ParticipantItem activity=name.clone() email=email.clone() /> }
            })
            .collect_view()
    };

    view! {
        <div class="activity-card" data-activity-name=activity.name.clone()>
            <h4 class="activity-title">{activity.name.clone()}</h4>
            <p class="activity-desc">{activity.description.clone()}</p>
            <p class="activity-schedule">
                <strong>"Schedule: "</strong>
                {format!(" {}", activity.schedule)}
            </p>
            <p class="activity-capacity">
                <strong>"Max participants: "</strong>
                {format!(" {}", activity.max_participants)}
            </p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                <ul class="participants-list">{roster}</ul>
            </div>
        </div>
    }
}

/// A roster row with its delete control
#[component]
fn ParticipantItem(activity: String, email: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let target = email.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        let activity = activity.clone();
        let email = target.clone();
        spawn_local(sync::unregister(state, activity, email));
    };

    view! {
        <li>
            <span class="participant-badge">{email.clone()}</span>
            <button
                class="participant-delete"
                title="Unregister participant"
                type="button"
                data-email=email
                on:click=on_click
            >
                "✖"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_key_tracks_roster() {
        let empty = Activity::new("Chess Club", "Strategy", "Fridays", 12);
        let joined = empty.clone().participant("michael@mergington.edu");

        assert_ne!(card_key(&empty), card_key(&joined));
        assert_eq!(card_key(&joined), card_key(&joined.clone()));
    }
}
