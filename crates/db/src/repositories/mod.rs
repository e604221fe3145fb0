//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method is at most one
//! lookup plus one write; the store's per-row atomicity is all the
//! concurrency control this layer needs.

pub mod room_repo;
pub mod user_repo;

pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;
