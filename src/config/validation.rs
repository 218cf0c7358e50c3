//! Configuration validation.

use anyhow::{Result, bail};
use chrono_tz::Tz;

use super::Config;

/// Validate a parsed configuration, naming the offending field on failure.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(name) = config.timezone.as_deref() {
        if name.parse::<Tz>().is_err() {
            bail!(
                "timezone '{name}' is not a known IANA timezone \
                 (expected something like \"Asia/Seoul\")"
            );
        }
    }
    Ok(())
}
