//! Authentication endpoints: login initiation and the OAuth callback.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use meetbridge_core::{Session, UserProfile, mock};
use meetbridge_providers::google::GoogleOAuthClient;

use crate::error::ApiError;
use crate::state::{AppState, SessionId};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/callback", get(callback))
}

/// Response from the login endpoint.
///
/// Exactly one of the two fields is non-null: a URL to redirect the end
/// user to, or the already-known user (cached session or mock mode).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The authorization URL the caller should redirect to, if login is
    /// required.
    pub auth_url: Option<String>,
    /// The user profile, when no redirect is needed.
    pub user: Option<UserProfile>,
}

/// Query parameters Google appends to the callback redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    /// The authorization code to exchange.
    pub code: Option<String>,
}

/// POST /auth/login - Start (or short-circuit) the login flow.
///
/// A cached session wins over everything; without one, unconfigured
/// deployments get the mock user and configured ones get the consent URL.
async fn login(State(state): State<AppState>, headers: HeaderMap) -> Json<LoginResponse> {
    let session_id = SessionId::from_headers(&headers);

    if let Some(session) = state.sessions.get(&session_id) {
        return Json(LoginResponse {
            auth_url: None,
            user: Some(session.profile),
        });
    }

    match state.config.google {
        None => Json(LoginResponse {
            auth_url: None,
            user: Some(mock::mock_user()),
        }),
        Some(ref google) => {
            let auth_url = GoogleOAuthClient::new(google.clone()).build_auth_url();
            Json(LoginResponse {
                auth_url: Some(auth_url),
                user: None,
            })
        }
    }
}

/// GET /auth/callback - Receive the authorization code from Google.
///
/// Exchanges the code, fetches the profile, commits both as one session,
/// and sends the browser back to the frontend. Any failure leaves the
/// session store untouched.
async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, ApiError> {
    let google = state.config.google.as_ref().ok_or_else(|| {
        ApiError::text("Authentication failed", "Google credentials not configured")
    })?;

    let code = params
        .code
        .ok_or_else(|| ApiError::text("Authentication failed", "missing authorization code"))?;

    let oauth = GoogleOAuthClient::new(google.clone());

    let credentials = oauth
        .exchange_code(&code)
        .await
        .map_err(|e| ApiError::text("Authentication failed", e))?;

    let profile = oauth
        .fetch_profile(&credentials.access_token)
        .await
        .map_err(|e| ApiError::text("Authentication failed", e))?;

    info!("authenticated {}", profile.email);

    let session_id = SessionId::from_headers(&headers);
    state
        .sessions
        .insert(session_id, Session::new(credentials, profile));

    Ok(Redirect::to(&format!(
        "{}?status=success",
        state.config.frontend_url
    )))
}
