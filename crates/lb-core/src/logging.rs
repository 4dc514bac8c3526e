//! Shared logging initialization for localbase binaries.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

fn level_from_env() -> tracing::Level {
    let raw = std::env::var("LOCALBASE_LOG").unwrap_or_default();
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Initialize process-level tracing output from `LOCALBASE_LOG`.
///
/// Safe to call from any entry point; only the first call installs the
/// subscriber, and installation failures (another subscriber already set)
/// are ignored.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level_from_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
