//! Process-wide settings instance
//!
//! The resolver runs at most once per process; everything that needs a
//! service address or the API base URL shares the committed
//! [`ResolvedSettings`] through [`current`]. Construction is guarded by
//! the slot's write lock, so concurrent first access still commits a
//! single instance, and a failed construction commits nothing.

use super::resolver::{resolve_settings, ConfigError, FileCapability};
use super::types::ResolvedSettings;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

static CURRENT: RwLock<Option<Arc<ResolvedSettings>>> = RwLock::new(None);

/// Get the process-wide settings, resolving them on the first call.
///
/// The first successful call commits the instance; later calls return
/// the same `Arc`. After a failed resolution nothing is cached, so the
/// next call retries from scratch instead of returning a broken object.
///
/// The emulator map is looked up in the process working directory; a
/// process without a resolvable working directory falls back to built-in
/// defaults, matching hosts without file-system access.
///
/// # Errors
///
/// Propagates the fatal cases of [`resolve_settings`]. Callers are
/// expected to abort startup rather than catch and continue.
pub fn current() -> Result<Arc<ResolvedSettings>, ConfigError> {
    if let Some(settings) = read_cached() {
        return Ok(settings);
    }

    let mut slot = lock_write();
    if let Some(settings) = slot.as_ref() {
        return Ok(Arc::clone(settings));
    }

    let cwd = std::env::current_dir().ok();
    let fs = match cwd.as_deref() {
        Some(dir) => FileCapability::Dir(dir),
        None => FileCapability::None,
    };

    let settings = Arc::new(resolve_settings(fs)?);
    *slot = Some(Arc::clone(&settings));
    Ok(settings)
}

/// Discard the cached instance so the next [`current`] call re-runs the
/// full resolution pipeline.
///
/// Test isolation only; runtime code has no reload path.
#[doc(hidden)]
pub fn reset() {
    *lock_write() = None;
}

fn read_cached() -> Option<Arc<ResolvedSettings>> {
    match CURRENT.read() {
        Ok(guard) => guard.as_ref().map(Arc::clone),
        Err(poisoned) => poisoned.into_inner().as_ref().map(Arc::clone),
    }
}

fn lock_write() -> RwLockWriteGuard<'static, Option<Arc<ResolvedSettings>>> {
    match CURRENT.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
