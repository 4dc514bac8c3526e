//! Configuration types

use serde::{Deserialize, Serialize};

/// Well-known emulator map file, looked up in the working directory.
pub const ENDPOINTS_FILE: &str = "localbase.json";

/// Host used for every local emulator endpoint.
pub const LOCAL_HOST: &str = "localhost";

/// Substituted when no source supplies a project id.
pub const PLACEHOLDER_PROJECT_ID: &str = "demo-project";

/// Default identity emulator port.
pub const DEFAULT_AUTH_PORT: u16 = 9099;
/// Default document-store emulator port.
pub const DEFAULT_DOCSTORE_PORT: u16 = 8080;
/// Default function-runner emulator port.
pub const DEFAULT_FUNCTIONS_PORT: u16 = 5001;
/// Default blob-storage emulator port.
pub const DEFAULT_STORAGE_PORT: u16 = 9199;
/// Default static-hosting emulator port.
pub const DEFAULT_HOSTING_PORT: u16 = 5000;

/// Runtime environment the process resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development against emulated services
    Development,
    /// Pre-production deployment
    Staging,
    /// Hosted platform
    Production,
}

impl Environment {
    /// Parse an ambient environment signal.
    ///
    /// Returns `None` for unrecognized spellings so the caller can fall
    /// through to the next source.
    pub fn from_signal(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "staging" => Some(Environment::Staging),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Public (client-side) platform credentials.
///
/// All fields are optional outside production; `api_key` and
/// `auth_domain` are required once `environment == production`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicCredentials {
    /// Web API key
    pub api_key: Option<String>,
    /// Identity-service domain
    pub auth_domain: Option<String>,
    /// Blob-storage bucket identifier
    pub storage_bucket: Option<String>,
    /// Messaging sender id
    pub sender_id: Option<String>,
    /// Registered application id
    pub app_id: Option<String>,
}

/// A single local emulator address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEndpoint {
    /// Always [`LOCAL_HOST`] for emulators
    pub host: String,
    /// TCP port the emulator listens on
    pub port: u16,
}

impl ServiceEndpoint {
    fn local(port: u16) -> Self {
        Self {
            host: LOCAL_HOST.to_string(),
            port,
        }
    }
}

/// Per-service emulator ports, prior to URL derivation.
///
/// `Default` yields the fixed well-known ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePorts {
    pub auth: u16,
    pub docstore: u16,
    pub functions: u16,
    pub storage: u16,
    pub hosting: u16,
}

impl Default for ServicePorts {
    fn default() -> Self {
        Self {
            auth: DEFAULT_AUTH_PORT,
            docstore: DEFAULT_DOCSTORE_PORT,
            functions: DEFAULT_FUNCTIONS_PORT,
            storage: DEFAULT_STORAGE_PORT,
            hosting: DEFAULT_HOSTING_PORT,
        }
    }
}

/// Resolved development endpoints for the five Localbase services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalEndpoints {
    /// Identity emulator
    pub auth: ServiceEndpoint,
    /// Document-store emulator
    pub docstore: ServiceEndpoint,
    /// Function-runner emulator
    pub functions: ServiceEndpoint,
    /// Blob-storage emulator
    pub storage: ServiceEndpoint,
    /// Static-hosting emulator
    pub hosting: ServiceEndpoint,
    /// Identity base URL, scoped to the project
    pub auth_url: String,
    /// Function invocation base URL, scoped to the project
    pub functions_url: String,
}

impl LocalEndpoints {
    pub fn from_ports(ports: ServicePorts, project_id: &str) -> Self {
        let auth = ServiceEndpoint::local(ports.auth);
        let functions = ServiceEndpoint::local(ports.functions);
        let auth_url = format!(
            "http://{}:{}/v1/projects/{project_id}",
            auth.host, auth.port
        );
        let functions_url = format!(
            "http://{}:{}/{project_id}/api",
            functions.host, functions.port
        );
        Self {
            auth,
            docstore: ServiceEndpoint::local(ports.docstore),
            functions,
            storage: ServiceEndpoint::local(ports.storage),
            hosting: ServiceEndpoint::local(ports.hosting),
            auth_url,
            functions_url,
        }
    }

    /// Endpoints with every service on its fixed well-known port.
    pub fn with_defaults(project_id: &str) -> Self {
        Self::from_ports(ServicePorts::default(), project_id)
    }
}

/// Outcome of [`ResolvedSettings::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True when no rule failed
    pub valid: bool,
    /// One message per failed rule, empty when valid
    pub errors: Vec<String>,
}

/// The process-wide settings object, committed once per process.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    /// Resolved runtime environment
    pub environment: Environment,
    /// Tenant/project identifier scoping all backend calls
    pub project_id: String,
    /// Public platform credentials
    pub credentials: PublicCredentials,
    /// Present iff development endpoints resolved
    pub local_endpoints: Option<LocalEndpoints>,
    /// Base URL for the application's HTTP calls
    pub api_base_url: String,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

impl ResolvedSettings {
    /// Check the environment-specific validation rules.
    ///
    /// Pure: reports every failed rule without mutating or committing
    /// anything. Used internally before a settings object is committed
    /// and exposed for introspection.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        if self.project_id.trim().is_empty() {
            errors.push("project_id must not be empty".to_string());
        }

        match self.environment {
            Environment::Production => {
                if is_blank(&self.credentials.api_key) {
                    errors.push(
                        "api_key is required in production (set LOCALBASE_API_KEY)".to_string(),
                    );
                }
                if is_blank(&self.credentials.auth_domain) {
                    errors.push(
                        "auth_domain is required in production (set LOCALBASE_AUTH_DOMAIN)"
                            .to_string(),
                    );
                }
                if self.local_endpoints.is_some() {
                    errors
                        .push("local emulator endpoints must not be set in production".to_string());
                }
            }
            Environment::Development => {
                if self.local_endpoints.is_none() {
                    errors.push(
                        "local emulator endpoints failed to resolve in development".to_string(),
                    );
                }
            }
            Environment::Staging => {}
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// True iff the environment is development and the emulator endpoints
    /// resolved.
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development && self.local_endpoints.is_some()
    }

    /// True iff the environment is production.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
