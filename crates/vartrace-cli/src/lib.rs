// NOTE: vartrace Architecture Rationale
//
// Why replay a run log (not subscribe to the host runtime)?
// - Test runners evolve and embed their own event buses; coupling to one
//   locks the tool to that runner's plugin API
// - A JSON Lines log is producible from any runner (or a fixture file),
//   so the same binary serves live shims, CI artifacts, and tests
// - Trade-off: diffs appear per delivered record, not per in-process hook
//
// Why keep the engine free of I/O?
// - Diffing and baseline tracking are the part worth reusing; printing is not
// - The handler owns reading, skipping malformed lines, and rendering;
//   the engine only ever sees well-formed events and never fails

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
