//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

use otelcol_core::DEFAULT_CONFIG_ROOT;

/// otelcol-config - Edit the collector's layered conf.d configuration
#[derive(Parser, Debug)]
#[command(name = "otelcol-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration root containing the conf.d directory
    #[arg(
        long,
        value_name = "DIR",
        env = "OTELCOL_CONFIG_DIR",
        default_value = DEFAULT_CONFIG_ROOT
    )]
    pub config: PathBuf,

    /// Delete a collector tag
    ///
    /// Removes the tag from the settings fragment, or with --override from
    /// the overrides fragment (and settings when it is defined there too).
    ///
    /// Examples:
    ///   otelcol-config --delete-tag team
    ///   otelcol-config --override --delete-tag team
    #[arg(long, value_name = "NAME")]
    pub delete_tag: Option<String>,

    /// Edit the overrides fragment instead of settings
    #[arg(long = "override", requires = "delete_tag")]
    pub override_mode: bool,

    /// Show the changes without writing them
    #[arg(long, requires = "delete_tag")]
    pub dry_run: bool,

    /// Output as JSON for scripting
    #[arg(long, requires = "delete_tag")]
    pub json: bool,
}
