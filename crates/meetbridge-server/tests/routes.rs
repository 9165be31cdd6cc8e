//! In-process tests of the HTTP surface: requests are driven through the
//! router with `tower::ServiceExt::oneshot`, and Google is replaced by a
//! wiremock stand-in.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{DateTime, Duration, Utc};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meetbridge_core::{CredentialSet, Session, UserProfile};
use meetbridge_providers::google::{GoogleConfig, OAuthCredentials};
use meetbridge_server::state::{AppState, SessionId};
use meetbridge_server::{ServerConfig, app};

fn google_config(server: &MockServer) -> GoogleConfig {
    GoogleConfig::new(
        OAuthCredentials::new("client-id", "client-secret"),
        ServerConfig::REDIRECT_URI,
    )
    .with_token_url(format!("{}/token", server.uri()))
    .with_userinfo_url(format!("{}/userinfo", server.uri()))
    .with_api_base(server.uri())
}

fn mock_state() -> AppState {
    AppState::new(ServerConfig::mock())
}

fn configured_state(server: &MockServer) -> AppState {
    AppState::new(ServerConfig::with_google(google_config(server)))
}

fn sample_session() -> Session {
    Session::new(
        CredentialSet::new("access-abc", Some("refresh-def".to_string()), Some(3600)),
        UserProfile::new("Ada Lovelace", "ada@example.com"),
    )
}

async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_login() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/login")
        .body(Body::empty())
        .unwrap()
}

fn get_meetings() -> Request<Body> {
    Request::builder()
        .uri("/api/meetings")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn login_unconfigured_returns_mock_user() {
    let response = send(app(mock_state()), post_login()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["authUrl"].is_null());
    assert_eq!(json["user"]["name"], "Demo User");
    assert_eq!(json["user"]["email"], "demo@meetbridge.dev");
}

#[tokio::test]
async fn login_with_cached_session_returns_profile() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state
        .sessions
        .insert(SessionId::single_user(), sample_session());

    let response = send(app(state), post_login()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["authUrl"].is_null());
    assert_eq!(json["user"]["name"], "Ada Lovelace");
    assert_eq!(json["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn login_configured_returns_auth_url() {
    let server = MockServer::start().await;
    let response = send(app(configured_state(&server)), post_login()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["user"].is_null());

    let auth_url = json["authUrl"].as_str().unwrap();
    assert!(auth_url.contains("calendar.readonly"));
    assert!(auth_url.contains("userinfo.profile"));
    assert!(auth_url.contains("userinfo.email"));
    assert!(auth_url.contains("access_type=offline"));
}

#[tokio::test]
async fn meetings_without_session_returns_single_mock_meeting() {
    let before = Utc::now();
    let response = send(app(mock_state()), get_meetings()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let upcoming = json["upcoming"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert!(json["past"].as_array().unwrap().is_empty());

    let start: DateTime<Utc> = upcoming[0]["startTime"].as_str().unwrap().parse().unwrap();
    let end: DateTime<Utc> = upcoming[0]["endTime"].as_str().unwrap().parse().unwrap();

    assert!((start - before).num_seconds().abs() <= 1);
    assert_eq!((end - start).num_milliseconds(), 3_600_000);
    assert!(
        upcoming[0]["description"]
            .as_str()
            .unwrap()
            .contains("GOOGLE_CLIENT_ID")
    );
}

#[tokio::test]
async fn meetings_partitions_future_and_past() {
    let server = MockServer::start().await;

    let future_start = (Utc::now() + Duration::hours(1)).to_rfc3339();
    let future_end = (Utc::now() + Duration::hours(2)).to_rfc3339();
    let past_start = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let past_end = (Utc::now() - Duration::minutes(30)).to_rfc3339();

    Mock::given(method("GET"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {
                    "id": "evt-past",
                    "summary": "Yesterday's Retro",
                    "start": {"dateTime": past_start},
                    "end": {"dateTime": past_end}
                },
                {
                    "id": "evt-future",
                    "start": {"dateTime": future_start},
                    "end": {"dateTime": future_end}
                }
            ]
        })))
        .mount(&server)
        .await;

    let state = configured_state(&server);
    state
        .sessions
        .insert(SessionId::single_user(), sample_session());

    let response = send(app(state), get_meetings()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let upcoming = json["upcoming"].as_array().unwrap();
    let past = json["past"].as_array().unwrap();

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["id"], "evt-future");
    // no summary on the future event
    assert_eq!(upcoming[0]["title"], "No Title");

    assert_eq!(past.len(), 1);
    assert_eq!(past[0]["id"], "evt-past");
    assert_eq!(past[0]["title"], "Yesterday's Retro");
}

#[tokio::test]
async fn meetings_provider_error_is_500_and_keeps_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let state = configured_state(&server);
    state
        .sessions
        .insert(SessionId::single_user(), sample_session());

    let response = send(app(state.clone()), get_meetings()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to fetch meetings");

    // the session survives the failure
    assert!(state.sessions.get(&SessionId::single_user()).is_some());
}

#[tokio::test]
async fn callback_success_commits_session_and_redirects() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "access-abc",
            "refresh_token": "refresh-def",
            "expires_in": 3599
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png"
        })))
        .mount(&server)
        .await;

    let state = configured_state(&server);
    let request = Request::builder()
        .uri("/auth/callback?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let response = send(app(state.clone()), request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "http://localhost:5173?status=success"
    );

    let session = state.sessions.get(&SessionId::single_user()).unwrap();
    assert_eq!(session.credentials.access_token, "access-abc");
    assert_eq!(session.profile.email, "ada@example.com");
}

#[tokio::test]
async fn callback_rejected_code_preserves_prior_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "invalid_grant"})),
        )
        .mount(&server)
        .await;

    let state = configured_state(&server);
    state
        .sessions
        .insert(SessionId::single_user(), sample_session());

    let request = Request::builder()
        .uri("/auth/callback?code=bad-code")
        .body(Body::empty())
        .unwrap();

    let response = send(app(state.clone()), request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // prior session untouched by the failed exchange
    let session = state.sessions.get(&SessionId::single_user()).unwrap();
    assert_eq!(session.credentials.access_token, "access-abc");
    assert_eq!(session.profile.name, "Ada Lovelace");
}

#[tokio::test]
async fn callback_profile_fetch_failure_commits_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "access-abc",
            "expires_in": 3599
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let state = configured_state(&server);
    let request = Request::builder()
        .uri("/auth/callback?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let response = send(app(state.clone()), request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // no tokens-without-profile half state
    assert!(state.sessions.get(&SessionId::single_user()).is_none());
}

#[tokio::test]
async fn callback_without_code_is_500() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .uri("/auth/callback")
        .body(Body::empty())
        .unwrap();

    let response = send(app(configured_state(&server)), request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn sessions_are_isolated_by_header() {
    let server = MockServer::start().await;
    let state = configured_state(&server);
    state
        .sessions
        .insert(SessionId::single_user(), sample_session());

    // a caller with a different session id is not logged in
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(SessionId::HEADER, "someone-else")
        .body(Body::empty())
        .unwrap();

    let response = send(app(state), request).await;
    let json = body_json(response).await;

    assert!(json["user"].is_null());
    assert!(json["authUrl"].is_string());
}
