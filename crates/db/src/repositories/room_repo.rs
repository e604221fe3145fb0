//! Repository for the `rooms` collection.

use sqlx::types::Json;
use sqlx::PgPool;
use stayvista_core::types::RoomId;

use crate::models::room::{CreateRoom, RoomRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fields, created_at";

/// Operations on room listings, keyed by a store-generated UUID.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a listing as-is. The store assigns the identifier.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<RoomRecord, sqlx::Error> {
        let query = format!("INSERT INTO rooms (fields) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, RoomRecord>(&query)
            .bind(Json(&input.fields))
            .fetch_one(pool)
            .await
    }

    /// List rooms, optionally restricted to an exact `category` match.
    ///
    /// `None` means no filter. The `"null"` sentinel some callers send is
    /// decoded at the transport edge; it never reaches this query.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<RoomRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms
             WHERE $1::text IS NULL OR fields->>'category' = $1"
        );
        sqlx::query_as::<_, RoomRecord>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Direct lookup by identifier. An absent record is `None`, not an error.
    pub async fn find_by_id(
        pool: &PgPool,
        id: RoomId,
    ) -> Result<Option<RoomRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, RoomRecord>(&query)
            .bind(id.as_uuid())
            .fetch_optional(pool)
            .await
    }

    /// Ownership-scoped listing: rooms whose nested `host.email` matches.
    pub async fn list_by_host_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<RoomRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE fields #>> '{{host,email}}' = $1");
        sqlx::query_as::<_, RoomRecord>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Delete at most one record. Deleting a non-existent identifier is a
    /// normal zero-count outcome.
    pub async fn delete_by_id(pool: &PgPool, id: RoomId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.as_uuid())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
