//! Google provider: OAuth web flow and Calendar API access.

pub mod client;
pub mod config;
pub mod oauth;

pub use client::GoogleCalendarClient;
pub use config::{GoogleConfig, OAuthCredentials};
pub use oauth::GoogleOAuthClient;
