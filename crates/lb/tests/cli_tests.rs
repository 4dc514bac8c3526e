//! Black-box tests for the lb binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ALL_VARS: &[&str] = &[
    "LOCALBASE_ENV",
    "APP_ENV",
    "LOCALBASE_PROJECT_ID",
    "APP_PROJECT_ID",
    "LOCALBASE_API_KEY",
    "APP_API_KEY",
    "LOCALBASE_AUTH_DOMAIN",
    "APP_AUTH_DOMAIN",
    "LOCALBASE_STORAGE_BUCKET",
    "APP_STORAGE_BUCKET",
    "LOCALBASE_SENDER_ID",
    "APP_SENDER_ID",
    "LOCALBASE_APP_ID",
    "APP_ID",
    "LOCALBASE_API_URL",
    "LOCALBASE_PROD_API_URL",
];

/// A command with every resolver signal scrubbed from the environment.
fn lb() -> Command {
    let mut cmd = Command::cargo_bin("lb").unwrap();
    for key in ALL_VARS {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn config_shows_development_defaults() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("environment: development"))
        .stdout(predicate::str::contains("localhost:9099"))
        .stdout(predicate::str::contains(
            "http://localhost:5001/demo-project/api",
        ));
}

#[test]
fn config_json_reflects_file_overrides() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("localbase.json"),
        r#"{"emulators": {"docstore": {"port": 9000}}}"#,
    )
    .unwrap();

    let output = lb()
        .current_dir(dir.path())
        .args(["config", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["environment"], "development");
    assert_eq!(parsed["projectId"], "demo-project");
    assert_eq!(parsed["emulators"]["docstore"]["port"], 9000);
    assert_eq!(parsed["emulators"]["auth"]["port"], 9099);
    assert_eq!(parsed["endpointsFile"]["exists"], true);
}

#[test]
fn config_masks_the_api_key() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .env("LOCALBASE_API_KEY", "super-secret-key")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key: (set)"))
        .stdout(predicate::str::contains("super-secret-key").not());
}

#[test]
fn check_passes_in_development() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn check_fails_without_api_url_in_staging() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .env("LOCALBASE_ENV", "staging")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API base URL"))
        .stderr(predicate::str::contains("fix:"));
}

#[test]
fn check_reports_production_validation_details() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .env("LOCALBASE_ENV", "production")
        .env("LOCALBASE_PROD_API_URL", "https://api.acme.example")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_key"))
        .stderr(predicate::str::contains("auth_domain"));
}

#[test]
fn check_passes_for_configured_production() {
    let dir = TempDir::new().unwrap();

    lb().current_dir(dir.path())
        .env("LOCALBASE_ENV", "production")
        .env("LOCALBASE_PROJECT_ID", "acme-prod")
        .env("LOCALBASE_API_KEY", "key-1")
        .env("LOCALBASE_AUTH_DOMAIN", "acme.localbase.app")
        .env("LOCALBASE_PROD_API_URL", "https://api.acme.example")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("production project acme-prod"));
}
