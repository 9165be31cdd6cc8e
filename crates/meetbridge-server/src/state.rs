//! Shared application state and the session store.
//!
//! Sessions live in an in-memory map keyed by an opaque session id and are
//! shared across handlers through axum state. A session id comes from the
//! optional `x-session-id` request header; the stock frontend sends none
//! and lands on the fixed single-user id.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::http::HeaderMap;
use meetbridge_core::Session;

use crate::config::ServerConfig;

/// An opaque identifier for a caller's session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Request header carrying the session id.
    pub const HEADER: &'static str = "x-session-id";

    /// The fixed id used when the caller sends no session header.
    pub fn single_user() -> Self {
        Self("single-user".to_string())
    }

    /// Resolves the session id from request headers, falling back to the
    /// single-user id.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(Self::HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_string()))
            .unwrap_or_else(Self::single_user)
    }
}

/// In-memory session store.
///
/// Insertion takes a whole [`Session`], so credentials and profile are
/// committed together; there is no way to store one without the other.
/// There is no removal path: sessions live until the process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the session for the given id, if any.
    pub fn get(&self, id: &SessionId) -> Option<Session> {
        self.inner.read().unwrap().get(id).cloned()
    }

    /// Commits a session (credentials and profile together).
    pub fn insert(&self, id: SessionId, session: Session) {
        self.inner.write().unwrap().insert(id, session);
    }
}

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The session store.
    pub sessions: SessionStore,
}

impl AppState {
    /// Creates state from a configuration with an empty session store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
        }
    }
}
