mod cli;
mod commands;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 gridfix v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let progress_handler = CliProgressHandler::new();
    match commands::regrid::run(&cli, &progress_handler) {
        Ok(summary) => {
            info!(
                atoms = summary.atom_count,
                molecules = summary.molecule_count(),
                "✅ Command completed successfully."
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
            Err(e)
        }
    }
}
