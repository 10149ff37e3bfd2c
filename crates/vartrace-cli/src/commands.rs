use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report { run_log } => {
            handlers::report::handle(&run_log, cli.format, cli.no_color, cli.silent)
        }
    }
}
