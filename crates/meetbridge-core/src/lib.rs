//! Core types shared across the meetbridge backend.
//!
//! This crate defines the domain model the HTTP surface exposes and the
//! provider layer produces:
//!
//! - [`Meeting`] - a reshaped calendar event as the frontend consumes it
//! - [`UserProfile`] - the authenticated user's basic identity
//! - [`CredentialSet`] - the OAuth token bundle obtained at callback time
//! - [`Session`] - credentials and profile committed together as one value
//! - [`mock`] - fixed demo data served when no provider is configured
//!
//! The types here are deliberately plain: no provider-specific fields, no
//! HTTP concerns. Providers normalize into [`Meeting`]; the server serializes
//! it unchanged.

pub mod meeting;
pub mod mock;
pub mod session;

pub use meeting::Meeting;
pub use session::{CredentialSet, Session, UserProfile};
