use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check licensed vendor components for available updates
#[derive(Parser, Debug)]
#[command(name = "hizzle-updater")]
#[command(version)]
#[command(about = "Check licensed vendor components for available updates", long_about = None)]
pub struct Args {
    /// Path to the configuration file (defaults to ./hizzle-updater.config.yml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the cache and license files (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Path to the installed-components manifest (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Log level filter (e.g. warn, info, debug); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check for updates, fetching version data when the cache is stale
    Check {
        /// Drop cached version data before checking
        #[arg(long)]
        force: bool,

        /// Exit with code 1 when at least one update is available
        #[arg(long)]
        fail_on_updates: bool,
    },

    /// Show cached license and update state without network access
    Status,

    /// Manage the license key
    #[command(subcommand)]
    License(LicenseCommand),

    /// Drop cached version data and the update count
    Flush,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LicenseCommand {
    /// Show the active license, validating it remotely
    Show,

    /// Activate a license key for this site
    Activate {
        /// The license key
        key: String,
    },

    /// Deactivate the active license on this site
    Deactivate,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
