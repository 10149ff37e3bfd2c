mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vartrace")]
#[command(about = "Report variable-store mutations across an API test run", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Disable ANSI styling regardless of terminal detection
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Consume the run log but print nothing
    #[arg(long, global = true)]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}
