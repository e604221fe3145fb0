pub mod health;
pub mod rooms;
pub mod session;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                POST issue (public), DELETE clear (public),
///                         GET whoami (requires auth)
///
/// /users                  PUT merge-write, GET list
/// /users/{email}          GET single record (null when absent)
///
/// /rooms                  POST create, GET list (?category=)
/// /rooms/{id}             GET single record, DELETE
/// /rooms/host/{email}     GET ownership-scoped listing
/// ```
///
/// The resource routes are deliberately public: the original deployment
/// never gated them, and changing that silently would break existing
/// clients. Only the whoami route mounts the auth extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/users", users::router())
        .nest("/rooms", rooms::router())
}
