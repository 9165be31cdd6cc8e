//! Google Calendar API client.
//!
//! A thin client over the Calendar v3 events listing. One client is built
//! per request from the session's access token; recurring events are
//! expanded to individual occurrences and results come back ordered by
//! start time.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::{RawEvent, RawEventTime};

use super::config::GoogleConfig;

/// Google Calendar API client, scoped to one access token.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    api_base: String,
    access_token: String,
}

/// A page of events from the Calendar API.
#[derive(Debug, Deserialize)]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
}

/// An event as the Calendar API returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    id: Option<String>,
    status: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    start: Option<ApiEventTime>,
    end: Option<ApiEventTime>,
    #[serde(default)]
    attendees: Vec<ApiAttendee>,
    hangout_link: Option<String>,
    html_link: Option<String>,
}

/// Start or end time of an API event: a timed instant or an all-day date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date_time: Option<String>,
    date: Option<String>,
}

/// An attendee entry from the API.
#[derive(Debug, Deserialize)]
struct ApiAttendee {
    email: Option<String>,
}

impl GoogleCalendarClient {
    /// Creates a calendar client for the given access token.
    pub fn new(config: &GoogleConfig, access_token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            api_base: config.api_base.clone(),
            access_token: access_token.into(),
        }
    }

    /// Lists events from a calendar, recurring events expanded, ordered by
    /// start time.
    ///
    /// # Arguments
    ///
    /// * `calendar_id` - The calendar identifier (e.g. `"primary"`)
    /// * `time_min` - Lower bound for event start time
    /// * `max_results` - Maximum number of events to return
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        max_results: usize,
    ) -> ProviderResult<Vec<RawEvent>> {
        let url = format!(
            "{}/calendars/{}/events",
            self.api_base,
            urlencoding::encode(calendar_id)
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", time_min.to_rfc3339()),
                ("maxResults", max_results.to_string()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::Authentication(
                "access token expired or invalid".to_string(),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read response: {e}")))?;

        let list: EventListResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("failed to parse response: {e}")))?;

        let events: Vec<RawEvent> = list.items.into_iter().filter_map(convert_event).collect();

        debug!("fetched {} events from calendar {}", events.len(), calendar_id);
        Ok(events)
    }
}

/// Converts a Calendar API event to a [`RawEvent`].
///
/// Returns `None` for cancelled events and events with unusable times.
fn convert_event(event: ApiEvent) -> Option<RawEvent> {
    if event.status.as_deref() == Some("cancelled") {
        return None;
    }

    let id = event.id?;
    let start = convert_time(event.start.as_ref(), &id, "start")?;
    let end = convert_time(event.end.as_ref(), &id, "end")?;

    let attendees = event
        .attendees
        .into_iter()
        .filter_map(|a| a.email)
        .collect();

    let mut raw = RawEvent::new(id, start, end).with_attendees(attendees);

    if let Some(summary) = event.summary {
        raw = raw.with_summary(summary);
    }
    if let Some(description) = event.description {
        raw = raw.with_description(description);
    }
    if let Some(link) = event.hangout_link {
        raw = raw.with_hangout_link(link);
    }
    if let Some(link) = event.html_link {
        raw = raw.with_html_link(link);
    }

    Some(raw)
}

/// Converts an API time to a [`RawEventTime`], preferring the timed field
/// over the all-day date field.
fn convert_time(time: Option<&ApiEventTime>, event_id: &str, which: &str) -> Option<RawEventTime> {
    let time = time?;

    if let Some(ref dt) = time.date_time {
        let parsed = DateTime::parse_from_rfc3339(dt)
            .map_err(|e| warn!("event {}: failed to parse {} time: {}", event_id, which, e))
            .ok()?;
        return Some(RawEventTime::DateTime(parsed.with_timezone(&Utc)));
    }

    if let Some(ref date) = time.date {
        let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| warn!("event {}: failed to parse {} date: {}", event_id, which, e))
            .ok()?;
        return Some(RawEventTime::Date(parsed));
    }

    warn!("event {} has no usable {} time", event_id, which);
    None
}
