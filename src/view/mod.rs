//! View Projection
//!
//! Renders the activity board into element trees matching the page's DOM
//! contract (`#activities-list`, `#activity`, `#message`).
//!
//! - **element**: a small HTML element builder with query helpers
//! - **render**: pure board-to-element projection

pub mod element;
pub mod render;

pub use element::{Element, Node};
pub use render::{
    is_placeholder, render_activity_list, render_card, render_message, render_participant,
    render_placeholder, render_roster, render_select, SELECT_PLACEHOLDER,
};
