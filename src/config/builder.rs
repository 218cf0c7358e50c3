//! Default configuration file generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_TIMEZONE;

/// The commented default configuration written on first run.
fn default_config_contents() -> String {
    format!(
        r#"#[Sajur config]
timezone = "{DEFAULT_TIMEZONE}"  # IANA timezone birth times are given in
use_solar_time = true       # Apply the fixed -30 minute solar-time correction
json_output = false         # Emit the serialized chart record instead of text
"#
    )
}

/// Create a default configuration file at the given path, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, default_config_contents())
        .with_context(|| format!("failed to write {}", path.display()))?;
    log_indented!("Created default configuration at {}", path.display());
    Ok(())
}
