//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::apps::AppsArgs;
use super::commands::check::CheckArgs;
use super::commands::get::GetArgs;
use super::commands::show::ShowArgs;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "superdesk-settings")]
#[command(about = "Inspect the deployment settings resolved from the environment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Directory holding the deployment `data/` folder
    #[arg(long, global = true, env = "SUPERDESK_BASE_DIR")]
    pub base_dir: Option<std::path::PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every resolved setting
    Show(ShowArgs),

    /// Resolve a single environment variable with an optional fallback
    Get(GetArgs),

    /// List installed application modules and the authentication backend
    Apps(AppsArgs),

    /// Resolve all settings and report the first error, if any
    Check(CheckArgs),
}
