//! Authentication middleware extractors.
//!
//! - [`auth::Identity`] -- extracts the authenticated identity from the
//!   session cookie.

pub mod auth;
