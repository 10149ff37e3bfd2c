use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snapshot::Snapshot;

/// What happened to a single key between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One changed key: `None` marks the side the key is absent from.
/// Unchanged keys never produce an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub old: Option<Value>,
    pub new: Option<Value>,
}

impl DiffEntry {
    pub fn kind(&self) -> ChangeKind {
        match (&self.old, &self.new) {
            (None, _) => ChangeKind::Added,
            (_, None) => ChangeKind::Removed,
            (Some(_), Some(_)) => ChangeKind::Modified,
        }
    }
}

/// Every changed key for one store kind over one event.
/// Empty means "no observable change" and must not be rendered.
pub type DiffResult = BTreeMap<String, DiffEntry>;

/// Compare two snapshots structurally.
///
/// Keys present in exactly one snapshot become added/removed entries; keys
/// present in both are compared with strict type-and-value equality and
/// become modified entries when unequal. Pure and deterministic: the result
/// depends only on the two inputs, never on enumeration order.
pub fn diff(old: &Snapshot, new: &Snapshot) -> DiffResult {
    let mut result = DiffResult::new();

    for (key, old_value) in old {
        match new.get(key) {
            None => {
                result.insert(
                    key.clone(),
                    DiffEntry {
                        old: Some(old_value.clone()),
                        new: None,
                    },
                );
            }
            Some(new_value) if new_value != old_value => {
                result.insert(
                    key.clone(),
                    DiffEntry {
                        old: Some(old_value.clone()),
                        new: Some(new_value.clone()),
                    },
                );
            }
            Some(_) => {}
        }
    }

    for (key, new_value) in new {
        if !old.contains_key(key) {
            result.insert(
                key.clone(),
                DiffEntry {
                    old: None,
                    new: Some(new_value.clone()),
                },
            );
        }
    }

    result
}
