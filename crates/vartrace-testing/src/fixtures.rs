//! Fixtures for run-log generation.
//!
//! Builds the JSON Lines run logs that integration tests feed to the CLI,
//! one serialized `RunRecord` per line, through the same types the CLI
//! parses with.

use serde_json::Value;
use vartrace_types::{
    Execution, ItemRef, RunDone, RunRecord, RunStart, ScriptEvent, VarStore,
};

/// Fluent builder for a run log.
///
/// # Example
/// ```
/// use vartrace_testing::RunLogBuilder;
/// use vartrace_types::VarStore;
///
/// let log = RunLogBuilder::new()
///     .run_start(Some(VarStore::from_pairs([("a", "1")])), None)
///     .script("Login", "test", Some(VarStore::from_pairs([("a", "2")])), None)
///     .done()
///     .build();
/// assert_eq!(log.lines().count(), 3);
/// ```
#[derive(Default)]
pub struct RunLogBuilder {
    records: Vec<RunRecord>,
}

impl RunLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the run's initial store values.
    pub fn run_start(mut self, globals: Option<VarStore>, environment: Option<VarStore>) -> Self {
        self.records.push(RunRecord::RunStart(RunStart {
            globals,
            environment,
        }));
        self
    }

    /// Append a script event with the current state of both stores.
    pub fn script(
        mut self,
        item_name: &str,
        target: &str,
        globals: Option<VarStore>,
        environment: Option<VarStore>,
    ) -> Self {
        self.records.push(RunRecord::Script(ScriptEvent {
            item: ItemRef {
                name: item_name.to_string(),
            },
            execution: Execution {
                target: target.to_string(),
                globals,
                environment,
            },
            timestamp: None,
            error: None,
        }));
        self
    }

    /// Append a script event carrying a host-reported error.
    pub fn script_with_error(
        mut self,
        item_name: &str,
        target: &str,
        globals: Option<VarStore>,
        error: Value,
    ) -> Self {
        self.records.push(RunRecord::Script(ScriptEvent {
            item: ItemRef {
                name: item_name.to_string(),
            },
            execution: Execution {
                target: target.to_string(),
                globals,
                environment: None,
            },
            timestamp: None,
            error: Some(error),
        }));
        self
    }

    pub fn done(mut self) -> Self {
        self.records.push(RunRecord::Done(RunDone { error: None }));
        self
    }

    pub fn done_with_error(mut self, error: Value) -> Self {
        self.records.push(RunRecord::Done(RunDone { error: Some(error) }));
        self
    }

    /// Serialize to JSON Lines, one record per line.
    pub fn build(self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record).expect("record serializes"));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_log_round_trips_through_types() {
        let log = RunLogBuilder::new()
            .run_start(Some(VarStore::from_pairs([("a", "1")])), None)
            .script("Login", "prerequest", Some(VarStore::from_pairs([("a", "1")])), None)
            .done()
            .build();

        for line in log.lines() {
            let _: RunRecord = serde_json::from_str(line).unwrap();
        }
    }
}
