//! Configuration loading functionality.
//!
//! Handles locating the configuration file, generating a default when none
//! exists, and parsing with validation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::validation::validate_config;
use super::Config;

/// Resolve the configuration file path.
///
/// A custom directory (from `--config`) takes precedence; otherwise the
/// platform config directory is used.
pub fn get_config_path(custom_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom_dir {
        return Ok(dir.join("sajur.toml"));
    }
    let base = dirs::config_dir().context("could not determine config directory")?;
    Ok(base.join("sajur").join("sajur.toml"))
}

/// Load configuration, creating a commented default file if none exists.
pub fn load(custom_dir: Option<&Path>) -> Result<Config> {
    let config_path = get_config_path(custom_dir)?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("failed to create default config")?;
    }

    load_from_path(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))
}

/// Load and validate configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("invalid TOML in {}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}
