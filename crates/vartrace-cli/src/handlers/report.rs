/// Report handler - replays a run log through a RunTracker and prints diffs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use vartrace_engine::{EventReport, RunTracker};
use vartrace_types::RunRecord;

use crate::args::OutputFormat;
use crate::presentation::presenters::report::present_event;
use crate::presentation::views::report::{CompletionView, EventReportView, Palette};

pub fn handle(run_log: &str, format: OutputFormat, no_color: bool, silent: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = if run_log == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(run_log)
            .with_context(|| format!("Failed to open run log '{}'", run_log))?;
        Box::new(BufReader::new(file))
    };

    let color = !no_color && io::stdout().is_terminal();
    let palette = Palette::new(color);

    let mut tracker: Option<RunTracker> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read run log")?;
        if line.trim().is_empty() {
            continue;
        }

        let record = match RunRecord::from_line(&line) {
            Ok(record) => record,
            Err(e) => {
                // One bad record must not abort the rest of the run
                eprintln!("Warning: skipping malformed record on line {}: {}", index + 1, e);
                continue;
            }
        };

        match record {
            RunRecord::RunStart(start) => {
                tracker = Some(RunTracker::new(
                    start.globals.as_ref(),
                    start.environment.as_ref(),
                ));
            }
            RunRecord::Script(event) => {
                // A log with no run_start record starts from empty baselines
                let tracker = tracker.get_or_insert_with(RunTracker::default);

                if let Some(error) = &event.error {
                    eprintln!("Script error on '{}': {}", event.item.name, error);
                }

                let report = tracker.observe(&event);
                if silent {
                    continue;
                }

                match format {
                    OutputFormat::Plain => {
                        if let Some(vm) = present_event(&report) {
                            print!("{}", EventReportView::new(&vm, palette));
                        }
                    }
                    OutputFormat::Json => print_json(&report)?,
                }
            }
            RunRecord::Done(done) => {
                if let Some(error) = &done.error {
                    eprintln!("{}", error);
                }
                if !silent && format == OutputFormat::Plain {
                    print!("{}", CompletionView::new(palette));
                }
            }
        }
    }

    let _ = io::stdout().flush();
    Ok(())
}

fn print_json(report: &EventReport) -> Result<()> {
    if report.global_diff.is_empty() && report.local_diff.is_empty() {
        return Ok(());
    }

    let record = serde_json::json!({
        "item": report.item_name,
        "target": report.target,
        "globals": report.global_diff,
        "local": report.local_diff,
    });
    println!("{}", record);
    Ok(())
}
