//! lb - inspect Localbase configuration resolution
//!
//! A thin CLI over the `localbase-core` resolver: runs the same layered
//! resolution an application process would, then reports or checks the
//! result.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    localbase_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
