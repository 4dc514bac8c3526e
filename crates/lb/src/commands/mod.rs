//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod check;
mod config_cmd;

/// lb - inspect Localbase configuration
#[derive(Parser, Debug)]
#[command(
    name = "lb",
    version,
    about = "Inspect Localbase configuration resolution",
    long_about = "Resolves the layered Localbase settings exactly as an application process \
                  would (environment variables, the localbase.json emulator map, built-in \
                  defaults) and reports the result"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show effective configuration
    Config(config_cmd::ConfigArgs),

    /// Validate the configuration, exiting non-zero with remediation text on failure
    Check,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Config(args) => config_cmd::execute(args),
            Commands::Check => check::execute(),
        }
    }
}
