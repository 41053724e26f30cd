//! Board Projection
//!
//! Pure functions from the model to element trees. Nothing here reads or
//! keeps state: the same board always renders to the same markup.

use crate::message::Message;
use crate::model::{Activity, ActivityBoard, NO_PARTICIPANTS};

use super::element::Element;

/// Label of the empty-valued first option of the activity select
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Render one activity card with its roster
pub fn render_card(activity: &Activity) -> Element {
    Element::new("div")
        .class("activity-card")
        .data("activity-name", activity.name.as_str())
        .child(
            Element::new("h4")
                .class("activity-title")
                .text(activity.name.as_str()),
        )
        .child(
            Element::new("p")
                .class("activity-desc")
                .text(activity.description.as_str()),
        )
        .child(
            Element::new("p")
                .class("activity-schedule")
                .child(Element::new("strong").text("Schedule: "))
                .text(format!(" {}", activity.schedule)),
        )
        .child(
            Element::new("p")
                .class("activity-capacity")
                .child(Element::new("strong").text("Max participants: "))
                .text(format!(" {}", activity.max_participants)),
        )
        .child(
            Element::new("div")
                .class("participants-section")
                .child(Element::new("h5").text("Participants"))
                .child(render_roster(activity)),
        )
}

/// Render the roster list, or the placeholder row when it is empty
pub fn render_roster(activity: &Activity) -> Element {
    let list = Element::new("ul").class("participants-list");
    if activity.participants.is_empty() {
        list.child(render_placeholder())
    } else {
        list.children(activity.participants.iter().map(|e| render_participant(e)))
    }
}

/// A participant row: badge plus its delete control
pub fn render_participant(email: &str) -> Element {
    Element::new("li")
        .child(Element::new("span").class("participant-badge").text(email))
        .child(
            Element::new("button")
                .class("participant-delete")
                .attr("title", "Unregister participant")
                .attr("type", "button")
                .data("email", email)
                .text("✖"),
        )
}

/// The non-participant row shown for an empty roster
pub fn render_placeholder() -> Element {
    Element::new("li").child(
        Element::new("span")
            .class("participant-badge")
            .text(NO_PARTICIPANTS),
    )
}

/// True if a roster item is the empty-roster placeholder
pub fn is_placeholder(item: &Element) -> bool {
    item.find_by_class("participant-delete").is_none()
        && item.text_content().trim() == NO_PARTICIPANTS
}

/// Render the `#activities-list` container with one card per activity
pub fn render_activity_list(board: &ActivityBoard) -> Element {
    Element::new("div")
        .attr("id", "activities-list")
        .children(board.iter().map(render_card))
}

/// Render the `#activity` select with the placeholder option first
pub fn render_select(board: &ActivityBoard, selected: &str) -> Element {
    let placeholder = Element::new("option")
        .attr("value", "")
        .text(SELECT_PLACEHOLDER);

    let options = board.iter().map(|activity| {
        let option = Element::new("option")
            .attr("value", activity.name.as_str())
            .text(activity.name.as_str());
        if activity.name == selected {
            option.attr("selected", "selected")
        } else {
            option
        }
    });

    Element::new("select")
        .attr("id", "activity")
        .child(placeholder)
        .children(options)
}

/// Render the `#message` area; hidden when nothing is showing
pub fn render_message(message: Option<&Message>) -> Element {
    match message {
        Some(m) => Element::new("div")
            .attr("id", "message")
            .class(format!("message {}", m.kind))
            .text(m.text.as_str()),
        None => Element::new("div").attr("id", "message").class("message hidden"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    fn board() -> ActivityBoard {
        ActivityBoard::new(vec![
            Activity::new("Chess", "Strategy", "Fridays", 12).participant("a@x.com"),
            Activity::new("Art", "Painting", "Thursdays", 15),
        ])
    }

    #[test]
    fn test_card_count_matches_board() {
        let list = render_activity_list(&board());
        assert_eq!(list.find_all_by_class("activity-card").len(), 2);
    }

    #[test]
    fn test_empty_roster_shows_single_placeholder() {
        let card = render_card(board().get("Art").unwrap());
        let roster = card.find_by_class("participants-list").unwrap();
        let items: Vec<_> = roster.child_elements().collect();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text_content(), NO_PARTICIPANTS);
        assert!(is_placeholder(items[0]));
    }

    #[test]
    fn test_participant_row_has_delete_control() {
        let card = render_card(board().get("Chess").unwrap());
        let roster = card.find_by_class("participants-list").unwrap();
        let items: Vec<_> = roster.child_elements().collect();

        assert_eq!(items.len(), 1);
        assert!(!is_placeholder(items[0]));
        let button = items[0].find_by_class("participant-delete").unwrap();
        assert_eq!(button.get_attr("data-email"), Some("a@x.com"));
        assert_eq!(button.get_attr("title"), Some("Unregister participant"));
    }

    #[test]
    fn test_card_markup() {
        let card = render_card(&Activity::new("Chess", "Strategy", "Fridays", 12));
        assert_eq!(
            card.to_html(),
            concat!(
                r#"<div class="activity-card" data-activity-name="Chess">"#,
                r#"<h4 class="activity-title">Chess</h4>"#,
                r#"<p class="activity-desc">Strategy</p>"#,
                r#"<p class="activity-schedule"><strong>Schedule: </strong> Fridays</p>"#,
                r#"<p class="activity-capacity"><strong>Max participants: </strong> 12</p>"#,
                r#"<div class="participants-section"><h5>Participants</h5>"#,
                r#"<ul class="participants-list"><li><span class="participant-badge">No participants yet</span></li></ul>"#,
                r#"</div></div>"#,
            )
        );
    }

    #[test]
    fn test_select_keeps_placeholder_and_marks_selection() {
        let select = render_select(&board(), "Art");
        let options: Vec<_> = select.child_elements().collect();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].get_attr("value"), Some(""));
        assert_eq!(options[1].get_attr("selected"), None);
        assert_eq!(options[2].get_attr("selected"), Some("selected"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let b = board();
        assert_eq!(
            render_activity_list(&b).to_html(),
            render_activity_list(&b.clone()).to_html()
        );
    }

    #[test]
    fn test_message_area() {
        let hidden = render_message(None);
        assert!(hidden.has_class("hidden"));

        let msg = Message::new("Activity full", MessageKind::Error);
        let shown = render_message(Some(&msg));
        assert_eq!(shown.get_attr("class"), Some("message error"));
        assert_eq!(shown.text_content(), "Activity full");
    }
}
