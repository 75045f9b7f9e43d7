//! Tag reconciliation
//!
//! The control plane has no atomic "replace tag" operation, only batched
//! add and batched remove keyed by ARN. Reconciling the operator's desired
//! tag map against what is currently attached therefore means computing a
//! delta once and applying removals before additions, so a changed value
//! never has two live entries for the same key.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Add/remove sets needed to reconcile current tags to desired tags
///
/// Persisted in the callback context once computed; handlers consume each
/// half exactly once and must never recompute the delta against a resource
/// that has already been partially retagged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDelta {
    /// Entries to attach, including re-adds for value changes
    pub to_add: BTreeMap<String, String>,
    /// Keys to detach before anything is added
    pub to_remove: BTreeSet<String>,
}

impl TagDelta {
    /// Compute the delta between the currently attached tags and the
    /// operator's desired tags
    ///
    /// A key whose value changes is removed and re-added, not updated in
    /// place. A key present in both maps with an equal value appears in
    /// neither set.
    pub fn diff(current: &BTreeMap<String, String>, desired: &BTreeMap<String, String>) -> Self {
        let to_remove = current
            .iter()
            .filter(|(key, value)| desired.get(*key) != Some(value))
            .map(|(key, _)| key.clone())
            .collect();
        let to_add = desired
            .iter()
            .filter(|(key, value)| current.get(*key) != Some(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        TagDelta { to_add, to_remove }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
