//! # Settings Loader
//!
//! Loads the calculator settings (covenant thresholds and the funding program
//! catalog) from a JSON file, usually `settings.json` next to the server.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! // Load settings from a specific path
//! let settings = settings_loader::load_settings("config/settings.json")?;
//!
//! // Fall back to built-in defaults when the file does not exist
//! let settings = settings_loader::load_settings_or_default("settings.json")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use models::Settings;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Loads settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))?;
    Ok(settings)
}

/// Loads settings from `path`, or returns the built-in defaults when the file
/// does not exist. A file that exists but cannot be parsed is an error.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !settings_file_exists(path) {
        tracing::info!(
            "No settings file at {}, using built-in defaults",
            path.display()
        );
        return Ok(Settings::default());
    }

    let settings = load_settings(path)?;
    tracing::info!(
        "Loaded settings from {} ({} funding programs)",
        path.display(),
        settings.funding_programs.len()
    );
    Ok(settings)
}

/// Checks if a settings file exists at the given path
pub fn settings_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}
