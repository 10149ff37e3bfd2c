use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One variable store as the host runtime reports it: an ordered list of
/// key/value entries nested under `values.members`.
///
/// Every layer defaults to empty so a missing or partially-shaped store
/// deserializes as "no variables" instead of failing the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VarStore {
    #[serde(default)]
    pub values: VarList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VarList {
    #[serde(default)]
    pub members: Vec<VarEntry>,
}

/// A single `{key, value}` entry. Values are opaque scalars from the host;
/// the engine never looks inside them, it only compares them for equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarEntry {
    pub key: String,

    #[serde(default)]
    pub value: Value,
}

impl VarStore {
    /// Build a store from `(key, value)` pairs, preserving order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        VarStore {
            values: VarList {
                members: pairs
                    .into_iter()
                    .map(|(key, value)| VarEntry {
                        key: key.into(),
                        value: value.into(),
                    })
                    .collect(),
            },
        }
    }
}

/// Which of the run's two stores a diff belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Run-scoped state shared by every request in the run
    Global,
    /// State scoped to the configured environment
    Local,
}
