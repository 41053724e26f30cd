//! Core data types for the activity board
//!
//! - `ActivityDetails`: one entry of the `GET /activities` response
//! - `Activity`: an activity with its name attached
//! - `ActivityBoard`: the ordered collection, as the server returned it

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::error::{ModelError, ModelResult};

/// Text of the placeholder row shown for an empty roster
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Activity fields as they appear on the wire, keyed by name in the response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A signup-able activity with its roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key, also used in request paths
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Attach a name to wire details
    pub fn from_details(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Builder-style constructor
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder method: add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Wire representation without the name
    pub fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }

    /// Check if the email is on the roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity, never negative
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// True when the roster has no participants and the placeholder shows instead
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// The client's copy of the activity collection
///
/// Order is the server's response order. Decoding a JSON object keeps the key
/// order instead of sorting, so cards and select options appear in the same
/// order the server listed them.
#[derive(Debug, Clone)]
pub struct ActivityBoard {
    activities: Vec<Activity>,
    fetched_at: DateTime<Utc>,
}

impl ActivityBoard {
    /// Create a board from activities, stamped with the current time
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            fetched_at: Utc::now(),
        }
    }

    /// A board with nothing on it (before the first load)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// When this board was received from the server
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Check if an activity with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Activity names in board order
    pub fn names(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.name.as_str()).collect()
    }

    /// Return a new board with `email` appended to the named roster.
    ///
    /// An email already on the roster leaves it unchanged.
    pub fn with_participant(&self, name: &str, email: &str) -> ModelResult<Self> {
        let mut next = self.clone();
        let activity = next.get_mut(name)?;
        if !activity.has_participant(email) {
            activity.participants.push(email.to_string());
        }
        Ok(next)
    }

    /// Return a new board with `email` removed from the named roster
    pub fn without_participant(&self, name: &str, email: &str) -> ModelResult<Self> {
        let mut next = self.clone();
        let activity = next.get_mut(name)?;
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        if activity.participants.len() == before {
            return Err(ModelError::UnknownParticipant {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        Ok(next)
    }

    fn get_mut(&mut self, name: &str) -> ModelResult<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| ModelError::UnknownActivity(name.to_string()))
    }
}

impl Default for ActivityBoard {
    fn default() -> Self {
        Self::empty()
    }
}

/// Boards compare by content; the fetch time is bookkeeping
impl PartialEq for ActivityBoard {
    fn eq(&self, other: &Self) -> bool {
        self.activities == other.activities
    }
}

impl Serialize for ActivityBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = ActivityBoard;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    // Duplicate keys: the later entry wins, like a JS object literal
                    activities.retain(|a: &Activity| a.name != name);
                    activities.push(Activity::from_details(name, details));
                }
                Ok(ActivityBoard::new(activities))
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> ActivityBoard {
        ActivityBoard::new(vec![
            Activity::new("Chess Club", "Learn strategies", "Fridays, 3:30 PM", 12)
                .participant("michael@mergington.edu")
                .participant("daniel@mergington.edu"),
            Activity::new("Art Club", "Paint and draw", "Thursdays, 3:30 PM", 15),
        ])
    }

    #[test]
    fn test_decode_preserves_server_order() {
        let json = r#"{
            "Zumba": {"description": "d", "schedule": "s", "max_participants": 5, "participants": []},
            "Art Club": {"description": "d", "schedule": "s", "max_participants": 5, "participants": ["a@x.com"]},
            "Chess Club": {"description": "d", "schedule": "s", "max_participants": 5, "participants": []}
        }"#;

        let board: ActivityBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.names(), vec!["Zumba", "Art Club", "Chess Club"]);
        assert_eq!(board.get("Art Club").unwrap().participants, vec!["a@x.com"]);
    }

    #[test]
    fn test_decode_missing_participants_is_empty() {
        let json = r#"{"Chess": {"description": "d", "schedule": "s", "max_participants": 3}}"#;
        let board: ActivityBoard = serde_json::from_str(json).unwrap();
        assert!(board.get("Chess").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(serde_json::from_str::<ActivityBoard>("[]").is_err());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let board = sample_board();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.find("Chess Club").unwrap() < json.find("Art Club").unwrap());

        let decoded: ActivityBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, board);
    }

    #[test]
    fn test_with_participant_returns_new_board() {
        let board = sample_board();
        let next = board.with_participant("Art Club", "a@x.com").unwrap();

        assert!(board.get("Art Club").unwrap().is_empty());
        assert_eq!(next.get("Art Club").unwrap().participants, vec!["a@x.com"]);
    }

    #[test]
    fn test_with_participant_is_unique() {
        let board = sample_board()
            .with_participant("Art Club", "a@x.com")
            .unwrap()
            .with_participant("Art Club", "a@x.com")
            .unwrap();

        assert_eq!(board.get("Art Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_with_participant_unknown_activity() {
        let err = sample_board().with_participant("Drama", "a@x.com").unwrap_err();
        assert_eq!(err, ModelError::UnknownActivity("Drama".to_string()));
    }

    #[test]
    fn test_without_participant() {
        let board = sample_board();
        let next = board
            .without_participant("Chess Club", "michael@mergington.edu")
            .unwrap();

        assert_eq!(
            next.get("Chess Club").unwrap().participants,
            vec!["daniel@mergington.edu"]
        );
        assert_eq!(board.get("Chess Club").unwrap().participants.len(), 2);
    }

    #[test]
    fn test_without_participant_not_registered() {
        let err = sample_board()
            .without_participant("Art Club", "nobody@x.com")
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownParticipant { .. }));
    }

    #[test]
    fn test_spots_left_saturates() {
        let full = Activity::new("Tiny", "d", "s", 1)
            .participant("a@x.com")
            .participant("b@x.com");
        assert_eq!(full.spots_left(), 0);

        let chess = sample_board();
        assert_eq!(chess.get("Chess Club").unwrap().spots_left(), 10);
    }
}
