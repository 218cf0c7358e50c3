//! Terms command implementation.
//!
//! Lists the twelve solar-term months with the ecliptic-longitude range
//! each one covers, starting from the spring start (입춘) at 315°.

use anyhow::Result;

use crate::chart::cycle::Branch;
use crate::chart::solar_terms::SOLAR_TERM_NAMES;
use crate::constants::{SPRING_START_LONGITUDE, TERM_MONTH_WIDTH_DEG};

/// Run the terms command.
pub fn run_terms_command() -> Result<()> {
    log_version!();
    log_block_start!("Solar-term months (ecliptic longitude ranges):");
    for term_index in 0..12i64 {
        let start = (SPRING_START_LONGITUDE + TERM_MONTH_WIDTH_DEG * term_index as f64) % 360.0;
        let end = (start + TERM_MONTH_WIDTH_DEG) % 360.0;
        let branch = Branch::from_cycle(term_index + 2);
        log_indented!(
            "{:>3}°–{:>3}°  {}",
            start,
            end,
            SOLAR_TERM_NAMES[branch.index() as usize]
        );
    }
    log_block_start!("Month boundaries follow the sun's actual longitude,");
    log_indented!("never fixed calendar dates.");
    log_end!();
    Ok(())
}
