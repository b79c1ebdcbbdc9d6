//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/google-listings-and-ads/`
//! - macOS: `~/Library/Application Support/google-listings-and-ads/`
//! - Windows: `%APPDATA%\google-listings-and-ads\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "google-listings-and-ads";

/// Get the application config directory
///
/// The directory is not created; callers only read from it.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
