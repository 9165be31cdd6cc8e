//! Server configuration, sourced from the environment.
//!
//! Provider credentials come from `GOOGLE_CLIENT_ID` and
//! `GOOGLE_CLIENT_SECRET`; when either is missing the server runs in mock
//! mode and serves synthetic data. The listening port defaults to 3000 and
//! honors a `PORT` override only outside production - in production the
//! router is mounted by the embedding process (see [`crate::app`]) and the
//! override is ignored.

use std::env;

use meetbridge_providers::google::{GoogleConfig, OAuthCredentials};
use tracing::info;

/// The deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development (the default).
    #[default]
    Development,
    /// Production: the port override is ignored.
    Production,
}

impl Environment {
    fn from_env_var(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Google provider configuration; `None` means mock mode.
    pub google: Option<GoogleConfig>,

    /// Base URL the callback redirects the browser to on success.
    pub frontend_url: String,

    /// The deployment environment.
    pub environment: Environment,

    /// `PORT` override, when set.
    port_override: Option<u16>,
}

impl ServerConfig {
    /// Default listening port.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Where the frontend is served in development.
    pub const FRONTEND_URL: &'static str = "http://localhost:5173";

    /// The OAuth redirect URI registered with Google.
    pub const REDIRECT_URI: &'static str = "http://localhost:3000/auth/callback";

    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        let google = match (env::var("GOOGLE_CLIENT_ID"), env::var("GOOGLE_CLIENT_SECRET")) {
            (Ok(id), Ok(secret)) if !id.is_empty() && !secret.is_empty() => Some(
                GoogleConfig::new(OAuthCredentials::new(id, secret), Self::REDIRECT_URI),
            ),
            _ => {
                info!("Google credentials not configured, serving mock data");
                None
            }
        };

        let environment = Environment::from_env_var(env::var("APP_ENV").ok().as_deref());
        let port_override = env::var("PORT").ok().and_then(|p| p.parse().ok());

        Self {
            google,
            frontend_url: Self::FRONTEND_URL.to_string(),
            environment,
            port_override,
        }
    }

    /// Creates a mock-mode configuration (no provider credentials).
    pub fn mock() -> Self {
        Self {
            google: None,
            frontend_url: Self::FRONTEND_URL.to_string(),
            environment: Environment::Development,
            port_override: None,
        }
    }

    /// Creates a configuration with the given Google provider setup.
    pub fn with_google(google: GoogleConfig) -> Self {
        Self {
            google: Some(google),
            frontend_url: Self::FRONTEND_URL.to_string(),
            environment: Environment::Development,
            port_override: None,
        }
    }

    /// The port to listen on.
    ///
    /// The `PORT` override is honored only in development.
    pub fn port(&self) -> u16 {
        match self.environment {
            Environment::Production => Self::DEFAULT_PORT,
            Environment::Development => self.port_override.unwrap_or(Self::DEFAULT_PORT),
        }
    }
}
