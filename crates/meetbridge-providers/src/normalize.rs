//! Reshaping raw provider events into frontend meeting records.
//!
//! The pipeline is a partition followed by a map: events are split into
//! upcoming and past by comparing each start against the clock, then each
//! list is converted to [`Meeting`] records independently.

use meetbridge_core::Meeting;

use crate::raw_event::RawEvent;

/// Converts a [`RawEvent`] to a [`Meeting`].
///
/// - Title falls back to [`Meeting::NO_TITLE`] when the provider gave no
///   summary or a blank one.
/// - Times render as RFC 3339 instants, or date-only strings for all-day
///   events.
/// - The link prefers the conference link over the calendar UI link.
pub fn normalize_event(raw: &RawEvent) -> Meeting {
    let title = raw
        .summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(Meeting::NO_TITLE);

    let mut meeting = Meeting::new(
        &raw.id,
        title,
        raw.start.to_iso_string(),
        raw.end.to_iso_string(),
    )
    .with_attendees(raw.attendees.clone());

    if let Some(ref description) = raw.description {
        meeting = meeting.with_description(description);
    }

    if let Some(link) = raw.hangout_link.as_ref().or(raw.html_link.as_ref()) {
        meeting = meeting.with_link(link);
    }

    meeting
}

/// Converts a list of raw events to meetings, preserving order.
pub fn normalize_events(events: &[RawEvent]) -> Vec<Meeting> {
    events.iter().map(normalize_event).collect()
}

/// Splits events into (upcoming, past) by start time.
///
/// An event is upcoming when its start is strictly after the clock reading
/// taken for that event; starts at or before it are past. The comparison
/// uses a fresh clock reading per event.
pub fn partition_events(events: Vec<RawEvent>) -> (Vec<RawEvent>, Vec<RawEvent>) {
    events
        .into_iter()
        .partition(|event| event.start.as_instant() > chrono::Utc::now())
}
