//! Configuration system for sajur with validation and default generation.
//!
//! Handles the TOML-based configuration file, validation, and default value
//! resolution for the CLI. The engine itself takes every flag explicitly;
//! this module only supplies the CLI's defaults.
//!
//! ## Configuration Sources
//!
//! The configuration is read from `$XDG_CONFIG_HOME/sajur/sajur.toml`
//! (or the platform equivalent), overridable with `--config <DIR>`. A
//! commented default file is generated on first run.
//!
//! ## Configuration Structure
//!
//! ```toml
//! timezone = "Asia/Seoul"  # IANA timezone the birth times are given in
//! use_solar_time = true    # Apply the fixed -30 minute solar-time correction
//! json_output = false      # Emit the serialized chart record instead of text
//! ```
//!
//! ## Validation and Error Handling
//!
//! Values are validated during loading: the timezone must be a known IANA
//! name. Invalid configurations produce an error naming the offending field
//! rather than falling back silently.

pub mod builder;
pub mod loading;
pub mod validation;


use chrono_tz::Tz;
use serde::Deserialize;

use crate::constants::DEFAULT_TIMEZONE;

// Re-export public API
pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path};
pub use validation::validate_config;

/// Configuration structure for sajur CLI defaults.
///
/// All fields are optional in the file; accessors resolve the defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// IANA timezone name birth times are interpreted in.
    pub timezone: Option<String>,

    /// Whether the fixed −30 minute solar-time correction is applied to
    /// the hour pillar by default.
    pub use_solar_time: Option<bool>,

    /// Whether the CLI emits the serialized JSON record instead of the
    /// structured text display.
    pub json_output: Option<bool>,
}

impl Config {
    /// The configured timezone, parsed; defaults to Asia/Seoul.
    ///
    /// Validation guarantees the stored name parses, so this only errors
    /// for configs that bypassed `load`.
    pub fn resolved_timezone(&self) -> anyhow::Result<Tz> {
        let name = self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
        name.parse()
            .map_err(|e| anyhow::anyhow!("invalid timezone '{name}': {e}"))
    }

    pub fn use_solar_time(&self) -> bool {
        self.use_solar_time.unwrap_or(true)
    }

    pub fn json_output(&self) -> bool {
        self.json_output.unwrap_or(false)
    }
}
