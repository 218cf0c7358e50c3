//! Hours command implementation.
//!
//! Lists the twelve 2-hour branch windows of the civil day, for callers
//! collecting a birth hour from someone who only remembers the traditional
//! window name.

use anyhow::Result;

use crate::chart::hour_windows;

/// Run the hours command.
pub fn run_hours_command() -> Result<()> {
    log_version!();
    log_block_start!("Hour branch windows (solar-time correction not applied):");
    for window in hour_windows() {
        log_indented!(
            "{} ({})  {}~{}",
            window.branch.hangul(),
            window.branch.hanja(),
            window.start.format("%H:%M"),
            window.end.format("%H:%M")
        );
    }
    log_block_start!("With the default -30 minute solar-time correction, each");
    log_indented!("window shifts 30 minutes later in clock time.");
    log_end!();
    Ok(())
}
