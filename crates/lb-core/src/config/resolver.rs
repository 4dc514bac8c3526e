//! Settings resolution pipeline
//!
//! Runs once per process, in order:
//! 1. Determine the environment (`LOCALBASE_ENV`, then `APP_ENV`, then
//!    development)
//! 2. Load the project id and public credentials from layered variables
//! 3. In development, load the emulator map from `localbase.json`,
//!    degrading to built-in defaults on any problem
//! 4. Compute the API base URL (override, then the function-runner URL,
//!    then the production URL override); fatal when all three are absent
//! 5. Validate the assembled settings; fatal when any rule fails
//! 6. Log a summary and hand the object back
//!
//! Steps 4 and 5 are the only fatal paths; everything else substitutes a
//! default and logs.

use super::file::EndpointsFile;
use super::types::{
    Environment, LocalEndpoints, PublicCredentials, ResolvedSettings, ENDPOINTS_FILE,
    PLACEHOLDER_PROJECT_ID,
};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

/// Which fatal pipeline step produced a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The assembled settings failed the environment-specific rules
    Validation,
    /// No source yielded an API base URL
    MissingApiBaseUrl,
}

/// Fatal configuration error.
///
/// Only two pipeline steps can produce one (see [`ConfigErrorKind`]);
/// degraded sources are absorbed with a logged warning instead. `details`
/// joins the individual failures, `resolution` carries remediation text
/// for the operator.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Failed pipeline step
    pub kind: ConfigErrorKind,
    /// Human-readable summary
    pub message: String,
    /// Joined list of the specific failures
    pub details: String,
    /// Actionable remediation text
    pub resolution: String,
}

impl ConfigError {
    fn validation(environment: Environment, errors: &[String]) -> Self {
        Self {
            kind: ConfigErrorKind::Validation,
            message: format!("configuration is invalid for the {environment} environment"),
            details: errors.join("; "),
            resolution: "Supply the missing settings through their LOCALBASE_* environment \
                         variables, or switch LOCALBASE_ENV to an environment the current \
                         settings satisfy."
                .to_string(),
        }
    }

    fn missing_api_base_url() -> Self {
        Self {
            kind: ConfigErrorKind::MissingApiBaseUrl,
            message: "no API base URL could be resolved".to_string(),
            details: "LOCALBASE_API_URL is unset, no local function-runner endpoint resolved, \
                      and LOCALBASE_PROD_API_URL is unset"
                .to_string(),
            resolution: "Set LOCALBASE_API_URL (or LOCALBASE_PROD_API_URL outside development), \
                         or run in development mode so the function-runner emulator URL applies."
                .to_string(),
        }
    }
}

/// Whether the process can reach the local file system.
///
/// Sandboxed hosts resolve emulator endpoints purely from built-in
/// defaults by passing [`FileCapability::None`]; everyone else passes the
/// directory holding `localbase.json` (normally the working directory).
#[derive(Debug, Clone, Copy)]
pub enum FileCapability<'a> {
    /// Look for the emulator map in this directory
    Dir(&'a Path),
    /// No local file access; skip straight to defaults
    None,
}

/// Resolve settings from all sources.
///
/// This is the raw pipeline; it performs no caching. Use
/// [`super::handle::current`] for the process-wide instance.
///
/// # Errors
///
/// Returns a [`ConfigError`] when no API base URL can be resolved or when
/// the assembled settings fail validation. Every other problem degrades
/// to a default with a logged warning.
pub fn resolve_settings(fs: FileCapability<'_>) -> Result<ResolvedSettings, ConfigError> {
    let environment = detect_environment();

    let project_id = layered_var("LOCALBASE_PROJECT_ID", "APP_PROJECT_ID")
        .unwrap_or_else(|| PLACEHOLDER_PROJECT_ID.to_string());

    let credentials = PublicCredentials {
        api_key: layered_var("LOCALBASE_API_KEY", "APP_API_KEY"),
        auth_domain: layered_var("LOCALBASE_AUTH_DOMAIN", "APP_AUTH_DOMAIN"),
        storage_bucket: layered_var("LOCALBASE_STORAGE_BUCKET", "APP_STORAGE_BUCKET"),
        sender_id: layered_var("LOCALBASE_SENDER_ID", "APP_SENDER_ID"),
        app_id: layered_var("LOCALBASE_APP_ID", "APP_ID"),
    };

    let local_endpoints = if environment == Environment::Development {
        Some(load_local_endpoints(fs, &project_id))
    } else {
        None
    };

    let api_base_url = resolve_api_base_url(local_endpoints.as_ref())?;

    let settings = ResolvedSettings {
        environment,
        project_id,
        credentials,
        local_endpoints,
        api_base_url,
    };

    let report = settings.validate();
    if !report.valid {
        return Err(ConfigError::validation(settings.environment, &report.errors));
    }

    log_summary(&settings);
    Ok(settings)
}

/// Step 1: explicit override, then the general runtime-mode signal, then
/// development. Unrecognized spellings are ignored with a warning.
fn detect_environment() -> Environment {
    for key in ["LOCALBASE_ENV", "APP_ENV"] {
        let Some(raw) = non_empty(std::env::var(key).ok()) else {
            continue;
        };
        match Environment::from_signal(&raw) {
            Some(environment) => return environment,
            None => warn!("Ignoring unrecognized environment {raw:?} in {key}"),
        }
    }
    Environment::Development
}

/// Step 3: load the emulator map, degrading to defaults on any problem.
/// This path never fails.
fn load_local_endpoints(fs: FileCapability<'_>, project_id: &str) -> LocalEndpoints {
    let FileCapability::Dir(dir) = fs else {
        return LocalEndpoints::with_defaults(project_id);
    };

    let path = dir.join(ENDPOINTS_FILE);
    if !path.exists() {
        warn!(
            "{ENDPOINTS_FILE} not found in {}, using default emulator ports",
            dir.display()
        );
        return LocalEndpoints::with_defaults(project_id);
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(
                "Failed to read {}: {e}, using default emulator ports",
                path.display()
            );
            return LocalEndpoints::with_defaults(project_id);
        }
    };

    let parsed: EndpointsFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(
                "Failed to parse {}: {e}, using default emulator ports",
                path.display()
            );
            return LocalEndpoints::with_defaults(project_id);
        }
    };

    match parsed.emulators {
        Some(map) => LocalEndpoints::from_ports(map.ports(), project_id),
        None => {
            warn!(
                "{} has no emulators section, using default emulator ports",
                path.display()
            );
            LocalEndpoints::with_defaults(project_id)
        }
    }
}

/// Step 4: the single error condition that aborts construction outright.
fn resolve_api_base_url(local: Option<&LocalEndpoints>) -> Result<String, ConfigError> {
    if let Some(url) = non_empty(std::env::var("LOCALBASE_API_URL").ok()) {
        return Ok(url);
    }
    if let Some(endpoints) = local {
        return Ok(endpoints.functions_url.clone());
    }
    if let Some(url) = non_empty(std::env::var("LOCALBASE_PROD_API_URL").ok()) {
        return Ok(url);
    }
    Err(ConfigError::missing_api_base_url())
}

fn log_summary(settings: &ResolvedSettings) {
    info!(
        "Resolved {} configuration for project {}",
        settings.environment, settings.project_id
    );
    info!("API base URL: {}", settings.api_base_url);
    if let Some(endpoints) = &settings.local_endpoints {
        info!(
            "Emulators: auth={}:{} docstore={}:{} functions={}:{} storage={}:{} hosting={}:{}",
            endpoints.auth.host,
            endpoints.auth.port,
            endpoints.docstore.host,
            endpoints.docstore.port,
            endpoints.functions.host,
            endpoints.functions.port,
            endpoints.storage.host,
            endpoints.storage.port,
            endpoints.hosting.host,
            endpoints.hosting.port,
        );
    }
}

fn layered_var(explicit: &str, alternate: &str) -> Option<String> {
    non_empty(std::env::var(explicit).ok()).or_else(|| non_empty(std::env::var(alternate).ok()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
