//! UI Components
//!
//! Leptos components for the signup page.

pub mod activity_card;
pub mod signup_form;
pub mod toast;

pub use activity_card::ActivityList;
pub use signup_form::SignupForm;
pub use toast::Toast;
