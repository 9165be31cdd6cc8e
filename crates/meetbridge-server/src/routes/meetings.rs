//! The meetings endpoint: list recent and upcoming calendar events.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde::Serialize;

use meetbridge_core::{Meeting, mock};
use meetbridge_providers::google::GoogleCalendarClient;
use meetbridge_providers::{normalize_events, partition_events};

use crate::error::ApiError;
use crate::state::{AppState, SessionId};

/// How far back the event window reaches.
const LOOKBACK_DAYS: i64 = 7;

/// Maximum number of events fetched from the provider.
const MAX_EVENTS: usize = 15;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/meetings", get(list_meetings))
}

/// Response from the meetings endpoint.
#[derive(Debug, Serialize)]
pub struct MeetingsResponse {
    /// Meetings starting strictly after now, ordered by start time.
    pub upcoming: Vec<Meeting>,
    /// Meetings starting at or before now, ordered by start time.
    pub past: Vec<Meeting>,
}

/// GET /api/meetings - Fetch the caller's meetings, split into upcoming
/// and past.
///
/// Without a session this returns the single mock meeting so the frontend
/// stays functional against an unconfigured backend. With one, it queries
/// the primary calendar for up to 15 events from the last 7 days onward
/// through a client built fresh from the stored access token. Provider
/// failures do not clear the session.
async fn list_meetings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeetingsResponse>, ApiError> {
    let session_id = SessionId::from_headers(&headers);

    let Some(session) = state.sessions.get(&session_id) else {
        return Ok(Json(MeetingsResponse {
            upcoming: vec![mock::mock_meeting(Utc::now())],
            past: Vec::new(),
        }));
    };

    let google = state.config.google.as_ref().ok_or_else(|| {
        ApiError::json(
            "Failed to fetch meetings",
            "session exists but Google credentials are not configured",
        )
    })?;

    let client = GoogleCalendarClient::new(google, &session.credentials.access_token);
    let time_min = Utc::now() - Duration::days(LOOKBACK_DAYS);

    let events = client
        .list_events("primary", time_min, MAX_EVENTS)
        .await
        .map_err(|e| ApiError::json("Failed to fetch meetings", e))?;

    let (upcoming, past) = partition_events(events);

    Ok(Json(MeetingsResponse {
        upcoming: normalize_events(&upcoming),
        past: normalize_events(&past),
    }))
}
