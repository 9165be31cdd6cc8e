//! OAuth 2.0 authorization-code flow for a confidential web client.
//!
//! The backend constructs the consent URL, the browser completes consent at
//! Google, and Google redirects back to the server's callback with a code.
//! [`GoogleOAuthClient::exchange_code`] trades that code for tokens at the
//! token endpoint, and [`GoogleOAuthClient::fetch_profile`] reads the
//! userinfo endpoint with the fresh access token.
//!
//! Offline access (`access_type=offline` with `prompt=consent`) is requested
//! so the exchange yields a refresh token alongside the access token.

use meetbridge_core::{CredentialSet, UserProfile};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ProviderError, ProviderResult};

use super::config::GoogleConfig;

/// OAuth client for the Google authorization-code web flow.
///
/// Construct one per request from the server configuration; it holds no
/// cross-request state.
#[derive(Debug)]
pub struct GoogleOAuthClient {
    config: GoogleConfig,
    http_client: reqwest::Client,
}

/// Response from Google's token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

/// Response from Google's userinfo endpoint.
#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    name: Option<String>,
    email: String,
    picture: Option<String>,
}

impl GoogleOAuthClient {
    /// Creates an OAuth client from the given configuration.
    pub fn new(config: GoogleConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Builds the authorization URL the end user is redirected to.
    ///
    /// Requests the configured scopes with offline access so the later
    /// exchange also yields a refresh token. Pure URL construction, no
    /// network call.
    pub fn build_auth_url(&self) -> String {
        let scope = self.config.scopes.join(" ");

        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&\
            access_type=offline&prompt=consent",
            self.config.auth_url,
            urlencoding::encode(&self.config.credentials.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(&scope),
        )
    }

    /// Exchanges an authorization code for a credential set.
    pub async fn exchange_code(&self, code: &str) -> ProviderResult<CredentialSet> {
        let params = [
            ("client_id", self.config.credentials.client_id.as_str()),
            ("client_secret", self.config.credentials.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(ProviderError::Authentication(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("invalid token response: {e}")))?;

        info!("successfully exchanged authorization code for tokens");
        Ok(CredentialSet::new(
            token_response.access_token,
            token_response.refresh_token,
            token_response.expires_in,
        ))
    }

    /// Fetches the user's basic profile with a fresh access token.
    pub async fn fetch_profile(&self, access_token: &str) -> ProviderResult<UserProfile> {
        let response = self
            .http_client
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(ProviderError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let userinfo: UserinfoResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("invalid userinfo response: {e}"))
        })?;

        debug!("fetched profile for {}", userinfo.email);

        let name = userinfo.name.unwrap_or_else(|| userinfo.email.clone());
        let mut profile = UserProfile::new(name, userinfo.email);
        if let Some(picture) = userinfo.picture {
            profile = profile.with_picture(picture);
        }
        Ok(profile)
    }
}
