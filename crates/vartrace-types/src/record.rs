use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::VarStore;

// NOTE: Run-log Schema Goals
//
// 1. Host independence: the engine never subscribes to the host runtime's
//    event bus directly. Hosts (or shims around them) emit one JSON record
//    per lifecycle event; any transport that yields lines works.
// 2. Tolerance: a record that is missing a store, a value, or a timestamp
//    still parses. A malformed record is skipped by the reader, never fatal.
// 3. Opaqueness: host-reported errors are carried as raw JSON and passed
//    through for logging; the engine does not interpret them.

/// One record of a run log, tagged by lifecycle phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum RunRecord {
    /// Run started; carries the configured initial store values (if any)
    RunStart(RunStart),

    /// A script finished executing against the current item
    Script(ScriptEvent),

    /// Run finished; carries the run-level error (if any)
    Done(RunDone),
}

impl RunRecord {
    /// Parse one line of a run log.
    pub fn from_line(line: &str) -> crate::Result<RunRecord> {
        Ok(serde_json::from_str(line)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStart {
    /// Initial global store configured for the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<VarStore>,

    /// Initial environment store configured for the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<VarStore>,
}

/// One script-execution event: the item it ran under, the script phase,
/// and the *current* state of both stores at this point in the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub item: ItemRef,

    pub execution: Execution,

    /// Event timestamp (UTC), when the host reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Host-reported script error, opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// The request/item a script event belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    /// Script phase, e.g. "prerequest" or "test"
    pub target: String,

    /// Current global store state after this script ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<VarStore>,

    /// Current environment store state after this script ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<VarStore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunDone {
    /// Run-level error reported by the host, opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}
