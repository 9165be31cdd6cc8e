//! Route handlers for the three-endpoint HTTP surface.

pub mod auth;
pub mod meetings;
