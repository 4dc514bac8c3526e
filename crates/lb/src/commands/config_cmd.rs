//! Config command implementation

use anyhow::Result;
use clap::Args;
use localbase_core::config::{resolve_settings, FileCapability, ENDPOINTS_FILE};
use serde_json::json;

/// Show effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the config command
pub fn execute(args: ConfigArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let settings = resolve_settings(FileCapability::Dir(&current_dir))?;

    let endpoints_path = current_dir.join(ENDPOINTS_FILE);
    let file_exists = endpoints_path.exists();

    if args.json {
        let mut output = json!({
            "environment": settings.environment,
            "projectId": settings.project_id,
            "apiBaseUrl": settings.api_base_url,
            "credentials": {
                "apiKey": settings.credentials.api_key.is_some(),
                "authDomain": settings.credentials.auth_domain,
                "storageBucket": settings.credentials.storage_bucket,
                "senderId": settings.credentials.sender_id,
                "appId": settings.credentials.app_id,
            },
            "endpointsFile": {
                "path": endpoints_path.display().to_string(),
                "exists": file_exists,
            },
        });
        if let Some(endpoints) = &settings.local_endpoints {
            output["emulators"] = serde_json::to_value(endpoints)?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Configuration:");
        println!("  environment: {}", settings.environment);
        println!("  project_id: {}", settings.project_id);
        println!("  api_base_url: {}", settings.api_base_url);
        // Only presence is reported for the key itself.
        let api_key = if settings.credentials.api_key.is_some() {
            "(set)"
        } else {
            "(unset)"
        };
        println!("  api_key: {api_key}");
        if let Some(domain) = &settings.credentials.auth_domain {
            println!("  auth_domain: {domain}");
        }
        if let Some(bucket) = &settings.credentials.storage_bucket {
            println!("  storage_bucket: {bucket}");
        }

        if let Some(endpoints) = &settings.local_endpoints {
            let file_status = if file_exists {
                "(found)"
            } else {
                "(not found, using defaults)"
            };
            println!();
            println!("Emulators: {} {file_status}", endpoints_path.display());
            println!("  auth:      {}:{}", endpoints.auth.host, endpoints.auth.port);
            println!("  docstore:  {}:{}", endpoints.docstore.host, endpoints.docstore.port);
            println!("  functions: {}:{}", endpoints.functions.host, endpoints.functions.port);
            println!("  storage:   {}:{}", endpoints.storage.host, endpoints.storage.port);
            println!("  hosting:   {}:{}", endpoints.hosting.host, endpoints.hosting.port);
            println!("  auth_url:      {}", endpoints.auth_url);
            println!("  functions_url: {}", endpoints.functions_url);
        }
    }

    Ok(())
}
