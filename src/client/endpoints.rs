//! Endpoint URLs
//!
//! Builds the three request URLs of the activities API. Activity names go in
//! a path segment and emails in the query string, so both are
//! percent-encoded.

/// Path of the activity collection relative to the server root
pub const ACTIVITIES_PATH: &str = "/activities";

/// URL builder rooted at the activity collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRoutes {
    base: String,
}

impl ActivityRoutes {
    /// Routes under a server root such as `http://localhost:8000`.
    ///
    /// An empty root yields same-origin paths (`/activities`).
    pub fn new(server_url: &str) -> Self {
        Self {
            base: format!("{}{}", server_url.trim_end_matches('/'), ACTIVITIES_PATH),
        }
    }

    /// `GET` target for the whole collection
    pub fn list(&self) -> String {
        self.base.clone()
    }

    /// `POST` target registering `email` for `activity`
    pub fn signup(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/{}/signup?email={}",
            self.base,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    /// `DELETE` target removing `email` from `activity`
    pub fn participant(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/{}/participants?email={}",
            self.base,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }
}
