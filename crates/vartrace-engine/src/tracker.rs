use vartrace_types::{ScriptEvent, VarStore};

use crate::diff::{diff, DiffResult};
use crate::snapshot::{snapshot, Snapshot};

/// Everything the tracker hands its caller for one script event.
///
/// The tracker decides only *whether* there is something to show (a
/// non-empty diff); rendering belongs entirely to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReport {
    pub item_name: String,
    pub target: String,
    /// False when this event belongs to the same item as the immediately
    /// previous one (a prerequest script followed by a test script), so
    /// callers can avoid repeating the item label.
    pub show_item_name: bool,
    pub global_diff: DiffResult,
    pub local_diff: DiffResult,
}

/// Rolling comparison state for one run.
///
/// Holds the last observed snapshot of each store and, per event, reports
/// what changed since then. Single-writer: events are observed one at a
/// time in host delivery order.
#[derive(Debug)]
pub struct RunTracker {
    global_baseline: Snapshot,
    local_baseline: Snapshot,
    last_item_name: Option<String>,
}

impl RunTracker {
    /// Seed baselines from the run's configured initial values.
    /// Missing seeds start the corresponding baseline empty, so a first
    /// event reports its whole store as added rather than erroring.
    pub fn new(globals: Option<&VarStore>, environment: Option<&VarStore>) -> Self {
        RunTracker {
            global_baseline: snapshot(globals),
            local_baseline: snapshot(environment),
            last_item_name: None,
        }
    }

    /// Process one script event: diff both stores against the held
    /// baselines, then advance the baselines to the event's snapshots.
    ///
    /// Baselines advance unconditionally, even when both diffs are empty,
    /// so repeated identical snapshots never re-report and drift cannot
    /// accumulate. Never fails.
    pub fn observe(&mut self, event: &ScriptEvent) -> EventReport {
        let current_global = snapshot(event.execution.globals.as_ref());
        let current_local = snapshot(event.execution.environment.as_ref());

        let global_diff = diff(&self.global_baseline, &current_global);
        let local_diff = diff(&self.local_baseline, &current_local);

        self.global_baseline = current_global;
        self.local_baseline = current_local;

        // Literal last-event-only comparison: a later event for an item
        // seen earlier (but not immediately prior) re-shows the name.
        let show_item_name = self.last_item_name.as_deref() != Some(event.item.name.as_str());
        self.last_item_name = Some(event.item.name.clone());

        EventReport {
            item_name: event.item.name.clone(),
            target: event.execution.target.clone(),
            show_item_name,
            global_diff,
            local_diff,
        }
    }
}

impl Default for RunTracker {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeKind;
    use serde_json::json;
    use vartrace_types::{Execution, ItemRef};

    fn event(name: &str, target: &str, globals: Option<VarStore>, env: Option<VarStore>) -> ScriptEvent {
        ScriptEvent {
            item: ItemRef {
                name: name.to_string(),
            },
            execution: Execution {
                target: target.to_string(),
                globals,
                environment: env,
            },
            timestamp: None,
            error: None,
        }
    }

    #[test]
    fn seeded_baseline_reports_only_the_addition() {
        let initial = VarStore::from_pairs([("a", "1")]);
        let mut tracker = RunTracker::new(Some(&initial), None);

        let report = tracker.observe(&event(
            "Login",
            "test",
            Some(VarStore::from_pairs([("a", "1"), ("b", "2")])),
            None,
        ));

        assert_eq!(report.global_diff.len(), 1);
        assert_eq!(report.global_diff["b"].old, None);
        assert_eq!(report.global_diff["b"].new, Some(json!("2")));
        assert!(report.local_diff.is_empty());
    }

    #[test]
    fn removed_local_variable_is_reported() {
        let initial = VarStore::from_pairs([("x", "foo"), ("y", "bar")]);
        let mut tracker = RunTracker::new(None, Some(&initial));

        let report = tracker.observe(&event(
            "Cleanup",
            "test",
            None,
            Some(VarStore::from_pairs([("x", "foo")])),
        ));

        assert_eq!(report.local_diff.len(), 1);
        assert_eq!(report.local_diff["y"].old, Some(json!("bar")));
        assert_eq!(report.local_diff["y"].new, None);
    }

    #[test]
    fn changed_value_reports_both_sides() {
        let initial = VarStore::from_pairs([("token", "abc")]);
        let mut tracker = RunTracker::new(Some(&initial), None);

        let report = tracker.observe(&event(
            "Refresh token",
            "test",
            Some(VarStore::from_pairs([("token", "xyz")])),
            None,
        ));

        assert_eq!(report.global_diff["token"].old, Some(json!("abc")));
        assert_eq!(report.global_diff["token"].new, Some(json!("xyz")));
    }

    #[test]
    fn baseline_advances_so_identical_followup_is_quiet() {
        let mut tracker = RunTracker::new(None, None);
        let store = VarStore::from_pairs([("a", "1")]);

        let first = tracker.observe(&event("Ping", "prerequest", Some(store.clone()), None));
        assert_eq!(first.global_diff.len(), 1);

        let second = tracker.observe(&event("Ping", "test", Some(store), None));
        assert!(second.global_diff.is_empty());
        assert!(second.local_diff.is_empty());
    }

    #[test]
    fn unseeded_first_event_reports_all_added() {
        let mut tracker = RunTracker::new(None, None);

        let report = tracker.observe(&event(
            "First",
            "prerequest",
            Some(VarStore::from_pairs([("a", "1")])),
            None,
        ));

        assert_eq!(report.global_diff.len(), 1);
        assert_eq!(report.global_diff["a"].kind(), ChangeKind::Added);
        assert_eq!(report.global_diff["a"].new, Some(json!("1")));
    }

    #[test]
    fn baseline_advances_even_when_diff_is_empty() {
        let initial = VarStore::from_pairs([("a", "1")]);
        let mut tracker = RunTracker::new(Some(&initial), None);

        // Same state as the seed: empty diff, but baseline still replaced
        let quiet = tracker.observe(&event(
            "One",
            "test",
            Some(VarStore::from_pairs([("a", "1")])),
            None,
        ));
        assert!(quiet.global_diff.is_empty());

        // Store reported absent: baseline must have advanced to empty...
        let emptied = tracker.observe(&event("Two", "test", None, None));
        assert_eq!(emptied.global_diff["a"].kind(), ChangeKind::Removed);

        // ...and stays empty afterwards
        let still_empty = tracker.observe(&event("Three", "test", None, None));
        assert!(still_empty.global_diff.is_empty());
    }

    #[test]
    fn item_name_shown_once_per_consecutive_item() {
        let mut tracker = RunTracker::new(None, None);

        let a1 = tracker.observe(&event("A", "prerequest", None, None));
        let a2 = tracker.observe(&event("A", "test", None, None));
        let b = tracker.observe(&event("B", "prerequest", None, None));
        let a3 = tracker.observe(&event("A", "prerequest", None, None));

        assert!(a1.show_item_name);
        assert!(!a2.show_item_name);
        assert!(b.show_item_name);
        // "A" was seen before, but not immediately prior, so it re-shows
        assert!(a3.show_item_name);
    }

    #[test]
    fn both_stores_tracked_independently() {
        let mut tracker = RunTracker::new(
            Some(&VarStore::from_pairs([("g", "1")])),
            Some(&VarStore::from_pairs([("l", "1")])),
        );

        let report = tracker.observe(&event(
            "Mixed",
            "test",
            Some(VarStore::from_pairs([("g", "2")])),
            Some(VarStore::from_pairs([("l", "1"), ("extra", "x")])),
        ));

        assert_eq!(report.global_diff["g"].kind(), ChangeKind::Modified);
        assert!(!report.global_diff.contains_key("extra"));
        assert_eq!(report.local_diff["extra"].kind(), ChangeKind::Added);
        assert!(!report.local_diff.contains_key("l"));
    }
}
