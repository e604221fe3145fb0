//! Domain types and rules shared by the storage and HTTP layers.

pub mod error;
pub mod merge;
pub mod types;
