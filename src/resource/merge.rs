//! Field-update merging for set-style operations
//!
//! Updates are an explicit list of (field, value) pairs applied to a
//! fetched record under a named policy, replacing the loose
//! merge-whatever-was-passed behavior the wire API invites.

use serde_json::Value;
use thiserror::Error;

/// How updates interact with fields the fetched record does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Only overwrite fields already present on the record; unknown
    /// fields are dropped. This matches the update contract of
    /// envelope-style APIs that reject schema expansion server-side.
    UpdateIfPresent,
    /// Set every supplied field, adding fields as needed.
    AlwaysSet,
    /// Fail on the first supplied field the record does not have.
    RejectUnknown,
}

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("field {0} does not exist on the fetched record")]
    UnknownField(String),

    #[error("cannot merge into a non-object record")]
    NotAnObject,
}

/// Apply `updates` to `record` in place under the given policy.
pub fn apply(
    record: &mut Value,
    updates: &[(String, Value)],
    policy: Policy,
) -> Result<(), MergeError> {
    let Some(map) = record.as_object_mut() else {
        return Err(MergeError::NotAnObject);
    };

    for (field, value) in updates {
        if map.contains_key(field) {
            map.insert(field.clone(), value.clone());
            continue;
        }

        match policy {
            Policy::UpdateIfPresent => {
                tracing::debug!("dropping update for unknown field {}", field);
            }
            Policy::AlwaysSet => {
                map.insert(field.clone(), value.clone());
            }
            Policy::RejectUnknown => {
                return Err(MergeError::UnknownField(field.clone()));
            }
        }
    }

    Ok(())
}
