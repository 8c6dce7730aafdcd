//! Protected-object set compilation.
//!
//! Compiled once from config at startup, then shared immutably. The set is
//! tiny (Security, sometimes Access Control), so a sorted Vec with binary
//! search beats a hash set here.

use dmgate_core::error::{DmError, Result};
use dmgate_core::model::path::{ObjectId, OID_SECURITY};

/// Immutable set of object ids whose instance existence must never be
/// disclosed to unauthorized callers.
#[derive(Debug, Clone)]
pub struct ProtectedObjectSet {
    ids: Vec<ObjectId>,
}

/// Compile the configured id list into a set.
///
/// Duplicates are collapsed; the Security object must be present (config
/// validation enforces this too, but the policy layer does not trust its
/// callers on a security invariant).
pub fn compile_protected_set(raw: &[ObjectId]) -> Result<ProtectedObjectSet> {
    let mut ids = raw.to_vec();
    ids.sort();
    ids.dedup();

    if !ids.contains(&OID_SECURITY) {
        return Err(DmError::BadRequest(
            "protected object set must include the Security object (0)".into(),
        ));
    }

    Ok(ProtectedObjectSet { ids })
}

impl ProtectedObjectSet {
    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }
}
