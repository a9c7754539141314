//! otelcol-config CLI
//!
//! Edits the tool-managed fragments of the collector's conf.d directory.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use commands::DeleteTagOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.delete_tag.as_deref() {
        Some(tag) => {
            let options = DeleteTagOptions {
                override_mode: cli.override_mode,
                dry_run: cli.dry_run,
                json: cli.json,
            };
            commands::run_delete_tag(&cli.config, tag, options)?;
            Ok(())
        }
        None => {
            // No action provided - show help hint
            println!("{} collector configuration tool", "otelcol-config".green().bold());
            println!();
            println!("Run {} for available actions.", "otelcol-config --help".cyan());
            Ok(())
        }
    }
}
