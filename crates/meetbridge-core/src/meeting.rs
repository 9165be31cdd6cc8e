//! The meeting record returned to the frontend.
//!
//! A [`Meeting`] is the reshaped form of a provider calendar event. Times are
//! kept as ISO-8601 strings rather than typed datetimes because all-day
//! events only carry a date (`YYYY-MM-DD`) while timed events carry a full
//! RFC 3339 instant; the frontend receives whichever the provider gave.

use serde::{Deserialize, Serialize};

/// A single calendar event, reshaped for the frontend.
///
/// Serializes with camelCase field names to match the JSON contract:
/// `{id, title, startTime, endTime, attendees, description?, link?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Provider-assigned event identifier.
    pub id: String,

    /// The event title. Falls back to [`Meeting::NO_TITLE`] when the
    /// provider gives none.
    pub title: String,

    /// When the meeting starts, as an ISO-8601 string.
    pub start_time: String,

    /// When the meeting ends, as an ISO-8601 string.
    pub end_time: String,

    /// Attendee email addresses.
    pub attendees: Vec<String>,

    /// The event description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A link to join or view the meeting, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Meeting {
    /// Placeholder title for events the provider returns without a summary.
    pub const NO_TITLE: &'static str = "No Title";

    /// Creates a meeting with the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            attendees: Vec::new(),
            description: None,
            link: None,
        }
    }

    /// Builder method to set the attendee list.
    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the meeting link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_creation() {
        let meeting = Meeting::new(
            "evt-1",
            "Team Sync",
            "2025-02-05T10:00:00+00:00",
            "2025-02-05T10:30:00+00:00",
        );

        assert_eq!(meeting.id, "evt-1");
        assert_eq!(meeting.title, "Team Sync");
        assert!(meeting.attendees.is_empty());
        assert!(meeting.description.is_none());
        assert!(meeting.link.is_none());
    }

    #[test]
    fn meeting_builder() {
        let meeting = Meeting::new("evt-1", "Standup", "2025-02-05", "2025-02-06")
            .with_attendees(vec!["a@example.com".to_string(), "b@example.com".to_string()])
            .with_description("Daily standup")
            .with_link("https://meet.google.com/abc-defg-hij");

        assert_eq!(meeting.attendees.len(), 2);
        assert_eq!(meeting.description.as_deref(), Some("Daily standup"));
        assert_eq!(
            meeting.link.as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
    }

    #[test]
    fn serializes_camel_case() {
        let meeting = Meeting::new(
            "evt-1",
            "Review",
            "2025-02-05T10:00:00+00:00",
            "2025-02-05T11:00:00+00:00",
        );

        let json = serde_json::to_value(&meeting).unwrap();
        assert_eq!(json["id"], "evt-1");
        assert_eq!(json["startTime"], "2025-02-05T10:00:00+00:00");
        assert_eq!(json["endTime"], "2025-02-05T11:00:00+00:00");
        assert!(json["attendees"].as_array().unwrap().is_empty());
    }

    #[test]
    fn optional_fields_omitted_when_absent() {
        let meeting = Meeting::new("evt-1", "Review", "2025-02-05", "2025-02-05");
        let json = serde_json::to_value(&meeting).unwrap();

        assert!(json.get("description").is_none());
        assert!(json.get("link").is_none());
    }
}
