//! Repository for the `users` collection.

use sqlx::types::Json;
use sqlx::PgPool;
use stayvista_core::merge::{merge_action, MergeAction};

use crate::models::user::{MergeOutcome, MergeUser, UserRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "email, fields, created_at";

/// Operations on user profile records, keyed by email.
pub struct UserRepo;

impl UserRepo {
    /// The three-way idempotent merge-write.
    ///
    /// First write for an email inserts the whole field bag plus a creation
    /// timestamp. A repeat write touches nothing unless its `status` field
    /// carries the role-request sentinel, in which case only `status` is
    /// overwritten in place. Repeated calls with the same payload never
    /// duplicate or corrupt the record.
    pub async fn merge_write(
        pool: &PgPool,
        input: &MergeUser,
    ) -> Result<MergeOutcome, sqlx::Error> {
        let existing = Self::find_by_email(pool, &input.email).await?;

        match merge_action(existing.as_ref().map(|r| &*r.fields), &input.fields) {
            MergeAction::Insert => {
                // A racing first-write for the same email degrades to the
                // idempotent no-op rather than a unique-violation error.
                let result = sqlx::query(
                    "INSERT INTO users (email, fields) VALUES ($1, $2)
                     ON CONFLICT (email) DO NOTHING",
                )
                .bind(&input.email)
                .bind(Json(&input.fields))
                .execute(pool)
                .await?;

                if result.rows_affected() > 0 {
                    Ok(MergeOutcome::Created)
                } else {
                    Ok(MergeOutcome::Noop)
                }
            }
            MergeAction::UpdateStatus(status) => {
                sqlx::query(
                    "UPDATE users
                     SET fields = jsonb_set(fields, '{status}', to_jsonb($2::text))
                     WHERE email = $1",
                )
                .bind(&input.email)
                .bind(&status)
                .execute(pool)
                .await?;
                Ok(MergeOutcome::Updated)
            }
            MergeAction::Noop => Ok(MergeOutcome::Noop),
        }
    }

    /// Full snapshot of all user records. Unordered, no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users");
        sqlx::query_as::<_, UserRecord>(&query).fetch_all(pool).await
    }

    /// Exact-key lookup. An absent record is `None`, not an error.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, UserRecord>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
