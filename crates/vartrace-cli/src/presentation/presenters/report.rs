use vartrace_engine::{DiffResult, EventReport};
use vartrace_types::StoreKind;

use crate::presentation::view_models::{
    DiffEntryViewModel, EventReportViewModel, StoreDiffViewModel,
};

/// Build the view model for one script event.
///
/// Returns `None` when both diffs are empty: nothing changed, nothing is
/// rendered. The engine's absent markers become `None` strings here; every
/// present value is JSON-rendered.
pub fn present_event(report: &EventReport) -> Option<EventReportViewModel> {
    let mut sections = Vec::new();

    if let Some(section) = present_store(StoreKind::Global, &report.global_diff) {
        sections.push(section);
    }
    if let Some(section) = present_store(StoreKind::Local, &report.local_diff) {
        sections.push(section);
    }

    if sections.is_empty() {
        return None;
    }

    Some(EventReportViewModel {
        item_name: report.item_name.clone(),
        show_item_name: report.show_item_name,
        target: report.target.clone(),
        sections,
    })
}

fn present_store(kind: StoreKind, diff: &DiffResult) -> Option<StoreDiffViewModel> {
    if diff.is_empty() {
        return None;
    }

    let entries = diff
        .iter()
        .map(|(key, entry)| DiffEntryViewModel {
            key: key.clone(),
            kind: entry.kind(),
            old: entry.old.as_ref().map(|v| v.to_string()),
            new: entry.new.as_ref().map(|v| v.to_string()),
        })
        .collect();

    Some(StoreDiffViewModel { kind, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vartrace_engine::{ChangeKind, DiffEntry};

    fn report_with_global(entries: Vec<(&str, Option<serde_json::Value>, Option<serde_json::Value>)>) -> EventReport {
        EventReport {
            item_name: "Login".to_string(),
            target: "test".to_string(),
            show_item_name: true,
            global_diff: entries
                .into_iter()
                .map(|(k, old, new)| (k.to_string(), DiffEntry { old, new }))
                .collect(),
            local_diff: DiffResult::new(),
        }
    }

    #[test]
    fn empty_report_presents_nothing() {
        let report = report_with_global(vec![]);
        assert!(present_event(&report).is_none());
    }

    #[test]
    fn quiet_store_gets_no_section() {
        let report = report_with_global(vec![("b", None, Some(json!("2")))]);
        let vm = present_event(&report).unwrap();

        assert_eq!(vm.sections.len(), 1);
        assert_eq!(vm.sections[0].kind, StoreKind::Global);
    }

    #[test]
    fn values_render_as_json() {
        let report = report_with_global(vec![
            ("s", Some(json!("abc")), Some(json!("xyz"))),
            ("n", Some(json!(1)), Some(json!(2))),
        ]);
        let vm = present_event(&report).unwrap();
        let entries = &vm.sections[0].entries;

        let s = entries.iter().find(|e| e.key == "s").unwrap();
        assert_eq!(s.old.as_deref(), Some("\"abc\""));
        assert_eq!(s.kind, ChangeKind::Modified);

        let n = entries.iter().find(|e| e.key == "n").unwrap();
        assert_eq!(n.old.as_deref(), Some("1"));
        assert_eq!(n.new.as_deref(), Some("2"));
    }
}
