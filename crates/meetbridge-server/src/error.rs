//! Error-to-response mapping for the HTTP surface.
//!
//! Every failure surfaces as HTTP 500 with a generic public message; the
//! detailed cause is logged server-side only. The meetings endpoint speaks
//! JSON (`{"error": ...}`); the OAuth callback answers the browser with
//! plain text.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// JSON error body for API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// The public error message.
    pub error: String,
}

/// How the error renders on the wire.
#[derive(Debug, Clone, Copy)]
enum ErrorFormat {
    Json,
    Text,
}

/// A request-terminal error: a generic public message plus a logged detail.
#[derive(Debug)]
pub struct ApiError {
    public: &'static str,
    detail: String,
    format: ErrorFormat,
}

impl ApiError {
    /// An error that renders as a JSON body (API endpoints).
    pub fn json(public: &'static str, detail: impl fmt::Display) -> Self {
        Self {
            public,
            detail: detail.to_string(),
            format: ErrorFormat::Json,
        }
    }

    /// An error that renders as plain text (browser-facing callback).
    pub fn text(public: &'static str, detail: impl fmt::Display) -> Self {
        Self {
            public,
            detail: detail.to_string(),
            format: ErrorFormat::Text,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}: {}", self.public, self.detail);

        match self.format {
            ErrorFormat::Json => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: self.public.to_string(),
                }),
            )
                .into_response(),
            ErrorFormat::Text => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.public.to_string()).into_response()
            }
        }
    }
}
