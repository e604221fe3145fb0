//! Handlers for the `/rooms` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stayvista_core::types::{Document, RoomId};
use stayvista_db::models::room::{CreateRoom, RoomRecord};
use stayvista_db::repositories::RoomRepo;
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

/// Query string for the room listing.
#[derive(Debug, Deserialize)]
pub struct ListRoomsQuery {
    pub category: Option<String>,
}

/// Response body for room creation: the store-assigned identifier.
#[derive(Debug, Serialize)]
pub struct CreateRoomResponse {
    pub id: Uuid,
}

/// Response body for deletion: how many records were removed (0 or 1).
#[derive(Debug, Serialize)]
pub struct DeleteRoomResponse {
    pub deleted: u64,
}

/// Decode the category filter at the transport edge.
///
/// A missing or empty parameter means "no filter"; so does the literal
/// string `"null"`, which existing clients send -- an accepted quirk of the
/// caller contract that is normalized here so the repository never sees it.
fn decode_category(raw: Option<String>) -> Option<String> {
    raw.filter(|c| !c.is_empty() && c != "null")
}

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<Document>,
) -> AppResult<(StatusCode, Json<CreateRoomResponse>)> {
    let input = CreateRoom::new(fields)?;
    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreateRoomResponse { id: room.id })))
}

/// GET /api/v1/rooms?category=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListRoomsQuery>,
) -> AppResult<Json<Vec<RoomRecord>>> {
    let category = decode_category(query.category);
    let rooms = RoomRepo::list(&state.pool, category.as_deref()).await?;
    Ok(Json(rooms))
}

/// GET /api/v1/rooms/{id}
///
/// A malformed identifier is a 400; an absent record is a normal outcome
/// with a JSON `null` body.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<RoomRecord>>> {
    let id = RoomId::parse(&id)?;
    let room = RoomRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(room))
}

/// GET /api/v1/rooms/host/{email}
pub async fn list_by_host(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<RoomRecord>>> {
    let rooms = RoomRepo::list_by_host_email(&state.pool, &email).await?;
    Ok(Json(rooms))
}

/// DELETE /api/v1/rooms/{id}
///
/// Deleting a non-existent identifier is not an error; the count is zero.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteRoomResponse>> {
    let id = RoomId::parse(&id)?;
    let deleted = RoomRepo::delete_by_id(&state.pool, id).await?;
    Ok(Json(DeleteRoomResponse { deleted }))
}
