//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: each calls exactly one repository operation and
//! returns its result verbatim. No cross-repository transactions.

pub mod rooms;
pub mod session;
pub mod users;
