//! Shared identifier and value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A schema-less record payload: whatever field bag the caller supplied.
///
/// Callers own the shape; the repositories only read the handful of keys
/// named by the required-fields contract (`email`, `category`, `host.email`).
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Store-generated room identifier, assigned exactly once at insert and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Parse a caller-supplied identifier.
    ///
    /// Returns [`CoreError::MalformedId`] when the input is not a valid
    /// UUID, so lookup and delete paths can surface a client error instead
    /// of an unhandled fault.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        s.parse::<Uuid>()
            .map(RoomId)
            .map_err(|_| CoreError::MalformedId(s.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
