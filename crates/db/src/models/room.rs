//! Room record model and DTOs.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use stayvista_core::error::CoreError;
use stayvista_core::types::{Document, Timestamp};
use uuid::Uuid;

/// Full room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomRecord {
    pub id: Uuid,
    pub fields: Json<Document>,
    pub created_at: Timestamp,
}

impl RoomRecord {
    pub fn category(&self) -> Option<&str> {
        self.fields.get("category").and_then(|v| v.as_str())
    }

    /// The nested `host.email` attribute. Rooms reference their host by
    /// value, not by a live relation to the user record.
    pub fn host_email(&self) -> Option<&str> {
        self.fields
            .get("host")
            .and_then(|h| h.get("email"))
            .and_then(|v| v.as_str())
    }
}

/// Write DTO for room creation.
///
/// Construction enforces the required-fields contract: a listing must carry
/// a string `category` and a nested `host.email`. Everything else in the
/// bag is persisted as-is, unvalidated.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub fields: Document,
}

impl CreateRoom {
    pub fn new(fields: Document) -> Result<Self, CoreError> {
        let has_category = fields
            .get("category")
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.is_empty());
        if !has_category {
            return Err(CoreError::Validation(
                "room write requires a category field".into(),
            ));
        }

        let has_host_email = fields
            .get("host")
            .and_then(|h| h.get("email"))
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.is_empty());
        if !has_host_email {
            return Err(CoreError::Validation(
                "room write requires a host.email field".into(),
            ));
        }

        Ok(Self { fields })
    }
}
