//! Fixed demo data served when no provider credentials are configured.
//!
//! Mock mode keeps the frontend fully functional against an unconfigured
//! backend: login returns a synthetic user, and the meetings endpoint
//! returns a single synthetic meeting whose description points at the
//! missing configuration.

use chrono::{DateTime, Duration, Utc};

use crate::meeting::Meeting;
use crate::session::UserProfile;

/// How long the mock meeting lasts.
pub const MOCK_MEETING_DURATION_SECS: i64 = 3600;

/// Returns the fixed mock user for unconfigured deployments.
pub fn mock_user() -> UserProfile {
    UserProfile::new("Demo User", "demo@meetbridge.dev")
        .with_picture("https://www.gravatar.com/avatar/?d=mp")
}

/// Returns the single mock meeting, starting at `now` and ending exactly
/// one hour later.
pub fn mock_meeting(now: DateTime<Utc>) -> Meeting {
    let end = now + Duration::seconds(MOCK_MEETING_DURATION_SECS);

    Meeting::new(
        "mock-meeting-1",
        "Demo: Team Standup",
        now.to_rfc3339(),
        end.to_rfc3339(),
    )
    .with_attendees(vec![
        "demo@meetbridge.dev".to_string(),
        "teammate@meetbridge.dev".to_string(),
    ])
    .with_description(
        "This is sample data. Set GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET \
         to see your real calendar events.",
    )
}
