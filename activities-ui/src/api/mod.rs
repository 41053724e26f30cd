//! Activities API access from the browser

pub mod client;

pub use client::{fetch_activities, get_api_root, signup, unregister};
