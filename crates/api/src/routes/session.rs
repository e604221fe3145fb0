//! Route definitions for the `/session` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`.
///
/// ```text
/// POST   /  -> issue (public)
/// DELETE /  -> clear (public)
/// GET    /  -> whoami (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(session::issue)
            .delete(session::clear)
            .get(session::whoami),
    )
}
