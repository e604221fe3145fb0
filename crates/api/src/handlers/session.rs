//! Handlers for the `/session` resource (issue, clear, whoami).

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use stayvista_core::types::Document;

use crate::auth::{cookies, jwt};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::Identity;
use crate::state::AppState;

/// Success marker returned by issue and clear.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// POST /api/v1/session
///
/// Sign the caller-supplied identity claim into a session token and set it
/// as the session cookie. The claim's shape is the caller's business; it is
/// signed as-is with a fixed lifetime.
pub async fn issue(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Document>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let token = jwt::issue_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    tracing::debug!(email = ?identity.get("email"), "issued session token");

    let jar = cookies::attach(jar, token, state.config.environment);
    Ok((jar, Json(SessionResponse { success: true })))
}

/// DELETE /api/v1/session
///
/// Clear the session cookie. The server keeps no revocation list, so this
/// only removes the client's copy; an unexpired token remains
/// cryptographically valid.
pub async fn clear(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let jar = cookies::clear(jar, state.config.environment);
    (jar, Json(SessionResponse { success: true }))
}

/// GET /api/v1/session
///
/// Return the authenticated identity decoded from the session cookie. The
/// one route that mounts the auth gate; everything else is public.
pub async fn whoami(identity: Identity) -> Json<Document> {
    tracing::debug!(email = ?identity.email(), "session identity lookup");
    Json(identity.into_claims())
}
