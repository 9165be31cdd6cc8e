//! Google provider configuration.

use std::time::Duration;

/// OAuth 2.0 client credentials from the Google Cloud Console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    /// The OAuth 2.0 client ID.
    pub client_id: String,
    /// The OAuth 2.0 client secret.
    pub client_secret: String,
}

impl OAuthCredentials {
    /// Creates new OAuth credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Validates that both fields are non-empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.client_id.is_empty() {
            return Err("client_id is required");
        }
        if self.client_secret.is_empty() {
            return Err("client_secret is required");
        }
        Ok(())
    }
}

/// Configuration for the Google OAuth and Calendar clients.
///
/// Endpoint URLs default to the real Google services and are overridable
/// so tests can point at a local stand-in.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// OAuth credentials for the web-server client.
    pub credentials: OAuthCredentials,

    /// Where Google redirects the browser after consent.
    pub redirect_uri: String,

    /// OAuth scopes to request.
    pub scopes: Vec<String>,

    /// Authorization endpoint (consent page).
    pub auth_url: String,

    /// Token endpoint for the code exchange.
    pub token_url: String,

    /// Userinfo endpoint for the profile fetch.
    pub userinfo_url: String,

    /// Base URL of the Calendar API.
    pub api_base: String,

    /// Request timeout for all provider calls.
    pub timeout: Duration,
}

impl GoogleConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Read-only calendar access.
    pub const SCOPE_CALENDAR_READONLY: &'static str =
        "https://www.googleapis.com/auth/calendar.readonly";

    /// Basic profile information.
    pub const SCOPE_PROFILE: &'static str = "https://www.googleapis.com/auth/userinfo.profile";

    /// Email address.
    pub const SCOPE_EMAIL: &'static str = "https://www.googleapis.com/auth/userinfo.email";

    const AUTH_URL: &'static str = "https://accounts.google.com/o/oauth2/v2/auth";
    const TOKEN_URL: &'static str = "https://oauth2.googleapis.com/token";
    const USERINFO_URL: &'static str = "https://www.googleapis.com/oauth2/v2/userinfo";
    const API_BASE: &'static str = "https://www.googleapis.com/calendar/v3";

    /// Creates a configuration with the default Google endpoints and the
    /// three scopes this backend needs.
    pub fn new(credentials: OAuthCredentials, redirect_uri: impl Into<String>) -> Self {
        Self {
            credentials,
            redirect_uri: redirect_uri.into(),
            scopes: Self::default_scopes(),
            auth_url: Self::AUTH_URL.to_string(),
            token_url: Self::TOKEN_URL.to_string(),
            userinfo_url: Self::USERINFO_URL.to_string(),
            api_base: Self::API_BASE.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// The scopes requested at login: read-only calendar, profile, email.
    pub fn default_scopes() -> Vec<String> {
        vec![
            Self::SCOPE_CALENDAR_READONLY.to_string(),
            Self::SCOPE_PROFILE.to_string(),
            Self::SCOPE_EMAIL.to_string(),
        ]
    }

    /// Builder method to override the token endpoint.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Builder method to override the userinfo endpoint.
    pub fn with_userinfo_url(mut self, url: impl Into<String>) -> Self {
        self.userinfo_url = url.into();
        self
    }

    /// Builder method to override the Calendar API base URL.
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.credentials
            .validate()
            .map_err(|e| format!("invalid credentials: {e}"))?;

        if self.redirect_uri.is_empty() {
            return Err("redirect_uri is required".to_string());
        }

        if self.scopes.is_empty() {
            return Err("at least one OAuth scope is required".to_string());
        }

        Ok(())
    }
}
