//! Raw event data as fetched from the provider.
//!
//! A [`RawEvent`] preserves the fields this backend cares about from the
//! Google Calendar Events API, before reshaping into a
//! [`meetbridge_core::Meeting`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The time specification for a raw event.
///
/// Timed events carry a full RFC 3339 instant; all-day events carry only
/// a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum RawEventTime {
    /// A specific instant in UTC.
    DateTime(DateTime<Utc>),
    /// An all-day event date (no specific time).
    Date(NaiveDate),
}

impl RawEventTime {
    /// Returns true if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Renders the time as an ISO-8601 string: RFC 3339 for instants,
    /// `YYYY-MM-DD` for all-day dates.
    pub fn to_iso_string(&self) -> String {
        match self {
            Self::DateTime(dt) => dt.to_rfc3339(),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Returns the instant to compare against "now" when partitioning.
    ///
    /// All-day dates are anchored at midnight UTC.
    pub fn as_instant(&self) -> DateTime<Utc> {
        match self {
            Self::DateTime(dt) => *dt,
            Self::Date(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

/// A calendar event as fetched from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Unique identifier within the provider.
    pub id: String,

    /// When the event starts.
    pub start: RawEventTime,

    /// When the event ends.
    pub end: RawEventTime,

    /// The event title, when the provider gave one.
    pub summary: Option<String>,

    /// The event description, when present.
    pub description: Option<String>,

    /// Attendee email addresses.
    pub attendees: Vec<String>,

    /// A conference link (Google Meet), when present.
    pub hangout_link: Option<String>,

    /// A link to view the event in the calendar UI.
    pub html_link: Option<String>,
}

impl RawEvent {
    /// Creates a raw event with the required fields.
    pub fn new(id: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            summary: None,
            description: None,
            attendees: Vec::new(),
            hangout_link: None,
            html_link: None,
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the attendee list.
    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    /// Builder method to set the conference link.
    pub fn with_hangout_link(mut self, link: impl Into<String>) -> Self {
        self.hangout_link = Some(link.into());
        self
    }

    /// Builder method to set the calendar UI link.
    pub fn with_html_link(mut self, link: impl Into<String>) -> Self {
        self.html_link = Some(link.into());
        self
    }
}
