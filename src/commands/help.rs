//! Help command implementation for sajur.

/// Display general help with usage, options, and examples.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: sajur [OPTIONS] <DATE> [TIME]");
    log_indented!("DATE  Birth date as YYYY-MM-DD");
    log_indented!("TIME  Birth time as HH:MM (omit if unknown; the hour");
    log_indented!("      pillar is then left out, not defaulted)");
    log_block_start!("Options:");
    log_indented!("-j, --json             Emit the serialized chart record");
    log_indented!("-z, --timezone <TZ>    IANA timezone (default Asia/Seoul)");
    log_indented!("-g, --gender <G>       male or female, enables luck direction");
    log_indented!("-S, --no-solar-time    Skip the -30 minute solar-time correction");
    log_indented!("-c, --config <DIR>     Use configuration from DIR");
    log_indented!("-d, --debug            Show calculation internals");
    log_indented!("-h, --help             Show this help");
    log_indented!("-V, --version          Show version");
    log_block_start!("Commands:");
    log_indented!("hours                  List the twelve hour-branch windows");
    log_indented!("terms                  List the twelve solar-term months");
    log_indented!("help                   Show this help");
    log_block_start!("Examples:");
    log_indented!("# Full chart with birth time");
    log_indented!("sajur 1978-05-16 11:00");
    log_pipe!();
    log_indented!("# Unknown birth time, JSON output");
    log_indented!("sajur --json 1990-03-15");
    log_end!();
}

/// Display version information.
pub fn display_version() {
    log_version!();
    log_block_start!("Astronomical four-pillars (saju) calculator");
    log_indented!("Solar-term boundaries from the sun's ecliptic longitude");
    log_end!();
}
