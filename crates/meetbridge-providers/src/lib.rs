//! Google Calendar integration for the meetbridge backend.
//!
//! This crate covers everything that talks to Google:
//!
//! - [`google::GoogleOAuthClient`] - authorization URL construction, the
//!   code-for-token exchange, and the userinfo profile fetch
//! - [`google::GoogleCalendarClient`] - event listing from the Calendar API
//! - [`RawEvent`] - the provider event as fetched, before reshaping
//! - [`normalize_event`] / [`partition_events`] - reshaping into
//!   [`meetbridge_core::Meeting`] and the upcoming/past split
//! - [`ProviderError`] - error type for all provider operations
//!
//! Clients are constructed fresh per request from the stored credential
//! set; nothing in this crate holds cross-request state.

pub mod error;
pub mod google;
pub mod normalize;
pub mod raw_event;

pub use error::{ProviderError, ProviderResult};
pub use normalize::{normalize_event, normalize_events, partition_events};
pub use raw_event::{RawEvent, RawEventTime};
