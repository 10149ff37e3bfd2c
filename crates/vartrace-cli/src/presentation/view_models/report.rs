use vartrace_engine::ChangeKind;
use vartrace_types::StoreKind;

/// Render-ready form of one reported script event. Built by the presenter
/// only when at least one store actually changed.
#[derive(Debug, Clone)]
pub struct EventReportViewModel {
    pub item_name: String,
    /// False when the previous event belonged to the same item
    pub show_item_name: bool,
    pub target: String,
    pub sections: Vec<StoreDiffViewModel>,
}

/// The changed entries of one store; the view derives the label.
#[derive(Debug, Clone)]
pub struct StoreDiffViewModel {
    pub kind: StoreKind,
    pub entries: Vec<DiffEntryViewModel>,
}

#[derive(Debug, Clone)]
pub struct DiffEntryViewModel {
    pub key: String,
    pub kind: ChangeKind,
    /// JSON-rendered values, so "1" and 1 stay distinguishable on screen
    pub old: Option<String>,
    pub new: Option<String>,
}
