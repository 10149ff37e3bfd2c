// Engine module - Core diffing logic (snapshot extraction, comparison, tracking)
// This layer sits between run-log records (types) and CLI presentation

pub mod diff;
pub mod snapshot;
mod tracker;

pub use diff::{diff, ChangeKind, DiffEntry, DiffResult};
pub use snapshot::{snapshot, Snapshot};
pub use tracker::{EventReport, RunTracker};
