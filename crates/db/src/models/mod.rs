//! Record structs and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` record struct matching the table row
//! - A write DTO whose constructor enforces the required-fields contract

pub mod room;
pub mod user;
