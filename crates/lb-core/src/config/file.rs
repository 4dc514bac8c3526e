//! On-disk schema for the `localbase.json` emulator map

use super::types::ServicePorts;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Parsed `localbase.json`.
///
/// Only the `emulators` section matters to the resolver; everything else
/// (deploy targets, tooling settings) is carried as unknown fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointsFile {
    #[serde(default)]
    pub emulators: Option<EmulatorMap>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// The `emulators` section, keyed by service name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmulatorMap {
    #[serde(default)]
    pub auth: Option<EmulatorEntry>,
    #[serde(default)]
    pub docstore: Option<EmulatorEntry>,
    #[serde(default)]
    pub functions: Option<EmulatorEntry>,
    #[serde(default)]
    pub storage: Option<EmulatorEntry>,
    #[serde(default)]
    pub hosting: Option<EmulatorEntry>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// One service's entry inside the `emulators` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmulatorEntry {
    #[serde(default, deserialize_with = "lenient_port")]
    pub port: Option<u16>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl EmulatorMap {
    /// Per-service ports, substituting the fixed default for any service
    /// whose entry or port is missing.
    pub fn ports(&self) -> ServicePorts {
        let defaults = ServicePorts::default();
        ServicePorts {
            auth: pick(&self.auth, defaults.auth),
            docstore: pick(&self.docstore, defaults.docstore),
            functions: pick(&self.functions, defaults.functions),
            storage: pick(&self.storage, defaults.storage),
            hosting: pick(&self.hosting, defaults.hosting),
        }
    }
}

fn pick(entry: &Option<EmulatorEntry>, default: u16) -> u16 {
    entry.as_ref().and_then(|e| e.port).unwrap_or(default)
}

/// A non-integer or out-of-range port is treated as absent rather than
/// failing the whole file.
fn lenient_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|p| u16::try_from(p).ok()))
}
