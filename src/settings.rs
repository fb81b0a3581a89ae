//! Persisted CLI settings, stored as JSON under `~/.tlget/config.json`.
//! Flags and environment variables always win over stored values.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::runtime::Runtime;

const SETTINGS_FILE: &str = "config.json";

/// Settings a user can persist with `tlget config`. Every field is optional;
/// a missing field falls back to the built-in default at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_dir: Option<PathBuf>,
}

/// Path of the settings file, or None when no home directory is available.
pub fn settings_path<R: Runtime>(runtime: &R) -> Option<PathBuf> {
    runtime
        .home_dir()
        .map(|home| home.join(".tlget").join(SETTINGS_FILE))
}

/// Loads stored settings. A missing file or missing home directory yields
/// the defaults; an unreadable or malformed file is an error.
#[tracing::instrument(skip(runtime))]
pub fn load<R: Runtime>(runtime: &R) -> Result<Settings> {
    let Some(path) = settings_path(runtime) else {
        return Ok(Settings::default());
    };
    if !runtime.exists(&path) {
        return Ok(Settings::default());
    }

    debug!("Loading settings from {}", path.display());
    let reader = runtime.open(&path)?;
    serde_json::from_reader(reader)
        .with_context(|| format!("Malformed settings file {}", path.display()))
}

/// Writes settings back, creating `~/.tlget` if needed.
#[tracing::instrument(skip(runtime, settings))]
pub fn save<R: Runtime>(runtime: &R, settings: &Settings) -> Result<()> {
    let path = settings_path(runtime)
        .context("Could not determine home directory for the settings file")?;
    if let Some(parent) = path.parent() {
        runtime.create_dir_all(parent)?;
    }

    debug!("Saving settings to {}", path.display());
    let writer = runtime.create_file(&path)?;
    serde_json::to_writer_pretty(writer, settings)
        .with_context(|| format!("Failed to write settings file {}", path.display()))
}
