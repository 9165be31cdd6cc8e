//! HTTP backend bridging a single-page frontend to Google Calendar.
//!
//! Three endpoints:
//!
//! - `POST /auth/login` - return a consent URL, the cached profile, or the
//!   mock user
//! - `GET /auth/callback` - exchange the authorization code, commit the
//!   session, redirect to the frontend
//! - `GET /api/meetings` - list recent and upcoming events, split at now
//!
//! [`app`] assembles the router and is public so production deployments
//! can mount it from an embedding process instead of running the bundled
//! binary.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use config::ServerConfig;
pub use state::AppState;

/// Builds the application router with permissive CORS.
///
/// The frontend is served from a different origin in development, so any
/// origin, method, and header are allowed.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::auth::router())
        .merge(routes::meetings::router())
        .with_state(state)
        .layer(cors)
}
