//! Route definitions for the `/users` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// PUT /          -> merge-write (created | updated | noop)
/// GET /          -> full snapshot
/// GET /{email}   -> single record, null when absent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", put(users::upsert).get(users::list))
        .route("/{email}", get(users::get_by_email))
}
