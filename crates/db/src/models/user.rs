//! User record model and DTOs.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use stayvista_core::error::CoreError;
use stayvista_core::types::{Document, Timestamp};

/// Full user row from the `users` table.
///
/// `fields` is the caller-supplied profile bag exactly as first written
/// (plus a later `status` overwrite, the one mutation the merge rule
/// allows).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRecord {
    pub email: String,
    pub fields: Json<Document>,
    pub created_at: Timestamp,
}

impl UserRecord {
    /// The `status` field, if the profile carries one.
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(|v| v.as_str())
    }
}

/// Write DTO for the merge-write operation.
///
/// Construction enforces the required-fields contract: a user write must
/// carry a non-empty string `email`, which becomes the record key.
#[derive(Debug, Clone)]
pub struct MergeUser {
    pub email: String,
    pub fields: Document,
}

impl MergeUser {
    pub fn new(fields: Document) -> Result<Self, CoreError> {
        let email = fields
            .get("email")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("user write requires an email field".into()))?
            .to_string();

        Ok(Self { email, fields })
    }
}

/// Outcome of a merge-write, reported verbatim to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeOutcome {
    /// First write for this email: a new record was inserted.
    Created,
    /// An existing record had its `status` field overwritten.
    Updated,
    /// An existing record was left untouched.
    Noop,
}
