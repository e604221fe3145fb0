//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use stayvista_core::types::Document;
use stayvista_db::models::user::{MergeOutcome, MergeUser, UserRecord};
use stayvista_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for the merge-write: which of the three outcomes applied.
#[derive(Debug, Serialize)]
pub struct MergeWriteResponse {
    pub result: MergeOutcome,
}

/// PUT /api/v1/users
///
/// The idempotent merge-write: create on first occurrence, update only the
/// `status` field when a role request comes in for an existing record,
/// otherwise change nothing.
pub async fn upsert(
    State(state): State<AppState>,
    Json(fields): Json<Document>,
) -> AppResult<Json<MergeWriteResponse>> {
    let input = MergeUser::new(fields)?;
    let result = UserRepo::merge_write(&state.pool, &input).await?;
    Ok(Json(MergeWriteResponse { result }))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserRecord>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{email}
///
/// Absent is a normal outcome: the body is JSON `null`, not a 404.
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Option<UserRecord>>> {
    let user = UserRepo::find_by_email(&state.pool, &email).await?;
    Ok(Json(user))
}
