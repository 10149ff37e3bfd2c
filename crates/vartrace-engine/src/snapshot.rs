use std::collections::BTreeMap;

use serde_json::Value;
use vartrace_types::VarStore;

/// An immutable point-in-time key → value mapping derived from a store.
pub type Snapshot = BTreeMap<String, Value>;

/// Flatten a store's ordered entries into a snapshot mapping.
///
/// Total over its domain: an absent store or one with no members yields an
/// empty snapshot. Duplicate keys within one store keep the last entry.
pub fn snapshot(store: Option<&VarStore>) -> Snapshot {
    let Some(store) = store else {
        return Snapshot::new();
    };

    store
        .values
        .members
        .iter()
        .map(|entry| (entry.key.clone(), entry.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_store_yields_empty_snapshot() {
        assert!(snapshot(None).is_empty());
    }

    #[test]
    fn empty_store_yields_empty_snapshot() {
        let store = VarStore::default();
        assert!(snapshot(Some(&store)).is_empty());
    }

    #[test]
    fn flattens_entries_to_mapping() {
        let store = VarStore::from_pairs([("a", json!("1")), ("b", json!(2))]);
        let snap = snapshot(Some(&store));

        assert_eq!(snap.len(), 2);
        assert_eq!(snap["a"], json!("1"));
        assert_eq!(snap["b"], json!(2));
    }

    #[test]
    fn duplicate_keys_keep_last_entry() {
        let store = VarStore::from_pairs([("a", "old"), ("a", "new")]);
        let snap = snapshot(Some(&store));

        assert_eq!(snap.len(), 1);
        assert_eq!(snap["a"], "new");
    }

    #[test]
    fn does_not_consume_the_store() {
        let store = VarStore::from_pairs([("a", "1")]);
        let _ = snapshot(Some(&store));
        assert_eq!(store.values.members.len(), 1);
    }
}
