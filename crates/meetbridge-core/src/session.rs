//! Credentials, profile, and the session that binds them.
//!
//! A [`Session`] owns both the [`CredentialSet`] and the [`UserProfile`],
//! so the two are committed and read as a single value. The "tokens present
//! but profile missing" state that a sequential commit could produce is
//! unrepresentable here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The OAuth token bundle issued by the provider at callback time.
///
/// Held in process memory for the process lifetime; never persisted and
/// never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    /// The access token for API requests.
    pub access_token: String,

    /// The refresh token, when the provider grants offline access.
    pub refresh_token: Option<String>,

    /// When the access token expires, if the provider said.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CredentialSet {
    /// Creates a credential set from a token endpoint response.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in_secs: Option<i64>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_at: expires_in_secs.map(|secs| Utc::now() + Duration::seconds(secs)),
        }
    }

    /// Returns true if the access token is past its expiry instant.
    ///
    /// Tokens without expiry metadata are treated as valid.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }
}

/// The authenticated user's basic identity, fetched once at callback time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// URL of the user's avatar image.
    pub picture: Option<String>,
}

impl UserProfile {
    /// Creates a profile with the given name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            picture: None,
        }
    }

    /// Builder method to set the avatar URL.
    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }
}

/// An authenticated session: credentials and profile, always together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The token bundle from the authorization-code exchange.
    pub credentials: CredentialSet,
    /// The profile fetched with those credentials.
    pub profile: UserProfile,
}

impl Session {
    /// Creates a session from a freshly exchanged credential set and the
    /// profile fetched with it.
    pub fn new(credentials: CredentialSet, profile: UserProfile) -> Self {
        Self {
            credentials,
            profile,
        }
    }
}
