//! Route definitions for the `/rooms` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// POST /               -> create listing
/// GET  /?category=     -> list ("null" / empty / absent = no filter)
/// GET  /{id}           -> single record, null when absent, 400 on bad id
/// DELETE /{id}         -> delete, {"deleted": 0|1}
/// GET  /host/{email}   -> ownership-scoped listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(rooms::create).get(rooms::list))
        .route("/host/{email}", get(rooms::list_by_host))
        .route("/{id}", get(rooms::get_by_id).delete(rooms::delete))
}
