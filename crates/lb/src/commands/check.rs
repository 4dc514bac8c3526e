//! Check command implementation

use anyhow::Result;
use localbase_core::config::{resolve_settings, FileCapability};

/// Execute the check command
///
/// Mirrors what an application process sees at startup: success prints a
/// one-line summary, a fatal configuration error prints the message,
/// details, and remediation text, then exits non-zero.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir()?;

    match resolve_settings(FileCapability::Dir(&current_dir)) {
        Ok(settings) => {
            println!(
                "configuration OK: {} project {}",
                settings.environment, settings.project_id
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("configuration error: {e}");
            if !e.details.is_empty() {
                eprintln!("  details: {}", e.details);
            }
            eprintln!("  fix: {}", e.resolution);
            std::process::exit(1);
        }
    }
}
