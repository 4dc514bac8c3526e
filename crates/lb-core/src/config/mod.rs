//! Configuration resolution
//!
//! Resolves the process-wide connection settings for the five Localbase
//! services from layered sources with priority:
//! 1. Explicit `LOCALBASE_*` environment variables
//! 2. Generic `APP_*` environment variables
//! 3. The `localbase.json` emulator map (development only)
//! 4. Built-in defaults
//!
//! Resolution runs once; the committed [`ResolvedSettings`] is immutable
//! for the lifetime of the process. See [`handle::current`] for the
//! process-wide instance and [`resolve_settings`] for the raw pipeline.

pub mod file;
pub mod handle;
mod resolver;
mod types;

pub use resolver::{ConfigError, ConfigErrorKind, FileCapability, resolve_settings};
pub use types::{
    Environment, LocalEndpoints, PublicCredentials, ResolvedSettings, ServiceEndpoint,
    ServicePorts, ValidationReport, DEFAULT_AUTH_PORT, DEFAULT_DOCSTORE_PORT,
    DEFAULT_FUNCTIONS_PORT, DEFAULT_HOSTING_PORT, DEFAULT_STORAGE_PORT, ENDPOINTS_FILE,
    LOCAL_HOST, PLACEHOLDER_PROJECT_ID,
};
