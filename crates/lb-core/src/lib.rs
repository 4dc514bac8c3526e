//! Core configuration resolution for Localbase-backed applications.
//!
//! An application built against the Localbase platform addresses five
//! backend services (identity, document store, function runner, blob
//! storage, static hosting). In development those services are stood in
//! for by local emulators; in production they are the hosted platform.
//! This crate resolves which of the two a process is talking to, exactly
//! once, from layered ambient sources:
//!
//! 1. Explicit `LOCALBASE_*` environment variables
//! 2. Generic `APP_*` environment variables
//! 3. The `localbase.json` emulator map in the working directory
//! 4. Built-in defaults
//!
//! The result is a single immutable [`config::ResolvedSettings`] held for
//! the lifetime of the process.

pub mod config;
pub mod logging;

pub use config::{
    ConfigError, ConfigErrorKind, Environment, FileCapability, LocalEndpoints, PublicCredentials,
    ResolvedSettings, ServiceEndpoint, ValidationReport, resolve_settings,
};
