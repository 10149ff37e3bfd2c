use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a run log and print per-script variable diffs
    Report {
        /// Path to a JSON Lines run log, or '-' for stdin
        run_log: String,
    },
}
