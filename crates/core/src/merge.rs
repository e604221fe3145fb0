//! The three-way idempotent merge rule for user records.
//!
//! A user write either inserts a brand-new record, updates the single
//! `status` field of an existing one, or does nothing. No other mutation of
//! an existing record is possible through this path, which is what makes
//! repeated writes with the same payload safe.

use serde_json::Value;

use crate::types::Document;

/// Sentinel `status` value signaling a host-role elevation request.
///
/// This is the only incoming field that can mutate an existing record.
pub const ROLE_REQUEST_STATUS: &str = "Requested";

/// Decision produced by [`merge_action`], executed by the user repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// No record exists for this email: insert all fields plus a creation
    /// timestamp.
    Insert,
    /// A record exists and the incoming `status` equals
    /// [`ROLE_REQUEST_STATUS`]: overwrite only the `status` field.
    UpdateStatus(String),
    /// A record exists and no role request is present: write nothing.
    Noop,
}

/// Decide what a merge-write does, given the currently stored record (if
/// any) and the incoming field bag.
pub fn merge_action(existing: Option<&Document>, incoming: &Document) -> MergeAction {
    if existing.is_none() {
        return MergeAction::Insert;
    }

    match incoming.get("status") {
        Some(Value::String(status)) if status == ROLE_REQUEST_STATUS => {
            MergeAction::UpdateStatus(status.clone())
        }
        _ => MergeAction::Noop,
    }
}
