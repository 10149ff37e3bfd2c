use std::fmt;

use owo_colors::{OwoColorize, Style};
use vartrace_engine::ChangeKind;
use vartrace_types::StoreKind;

use crate::presentation::view_models::EventReportViewModel;

/// Styles for the console renderer. `plain()` keeps every style empty so
/// the same views serve `--no-color` and piped output.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    item: Style,
    target: Style,
    header: Style,
    added: Style,
    removed: Style,
    modified: Style,
    done: Style,
}

impl Palette {
    pub fn colored() -> Self {
        Palette {
            item: Style::new().bold(),
            target: Style::new().dimmed().underline(),
            header: Style::new().cyan(),
            added: Style::new().green(),
            removed: Style::new().red(),
            modified: Style::new().yellow(),
            done: Style::new().green(),
        }
    }

    pub fn plain() -> Self {
        Palette {
            item: Style::new(),
            target: Style::new(),
            header: Style::new(),
            added: Style::new(),
            removed: Style::new(),
            modified: Style::new(),
            done: Style::new(),
        }
    }

    pub fn new(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

// --------------------------------------------------------
// Event Report View
// --------------------------------------------------------

pub struct EventReportView<'a> {
    report: &'a EventReportViewModel,
    palette: Palette,
}

impl<'a> EventReportView<'a> {
    pub fn new(report: &'a EventReportViewModel, palette: Palette) -> Self {
        Self { report, palette }
    }
}

impl<'a> fmt::Display for EventReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.report.show_item_name {
            writeln!(
                f,
                "-> {}",
                self.report.item_name.style(self.palette.item)
            )?;
        }

        writeln!(f, "  {}", self.report.target.style(self.palette.target))?;

        for section in &self.report.sections {
            let label = match section.kind {
                StoreKind::Global => "GLOBALS",
                StoreKind::Local => "LOCAL",
            };
            writeln!(f, "   ↳ {}", label.style(self.palette.header))?;

            for entry in &section.entries {
                let line = match entry.kind {
                    ChangeKind::Added => format!(
                        "+ {}: {}",
                        entry.key,
                        entry.new.as_deref().unwrap_or("null")
                    ),
                    ChangeKind::Removed => format!(
                        "- {}: {}",
                        entry.key,
                        entry.old.as_deref().unwrap_or("null")
                    ),
                    ChangeKind::Modified => format!(
                        "~ {}: {} -> {}",
                        entry.key,
                        entry.old.as_deref().unwrap_or("null"),
                        entry.new.as_deref().unwrap_or("null")
                    ),
                };

                let style = match entry.kind {
                    ChangeKind::Added => self.palette.added,
                    ChangeKind::Removed => self.palette.removed,
                    ChangeKind::Modified => self.palette.modified,
                };

                writeln!(f, "     {}", line.style(style))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Run Completion View
// --------------------------------------------------------

pub struct CompletionView {
    palette: Palette,
}

impl CompletionView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl fmt::Display for CompletionView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "Run completed".style(self.palette.done))
    }
}
