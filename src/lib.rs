//! # Sajur Library
//!
//! Internal library for the sajur binary application
//!
//! This library exists to enable testing of the calculation engine and provide clean
//! separation between CLI dispatch (main.rs) and the engine itself.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Engine**: `chart` module, the four-pillars (saju) calculation engine,
//!   a pure function from a civil birth moment to an immutable chart record
//! - **Ephemeris**: `ephemeris` module, the injectable solar-position capability
//!   and the built-in apparent-longitude implementation
//! - **Configuration**: `config` module for TOML-based settings with validation
//!   and default-file generation
//! - **Commands**: `commands` module for CLI subcommands (hours, terms, help)
//! - **Infrastructure**: argument parsing, logging, constants
//!
//! The engine never logs and holds no global state; the solar-position provider
//! is injected at construction so the calendar arithmetic is fully testable with
//! a stubbed longitude.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod chart;
pub mod commands;
pub mod config;
pub mod constants;
pub mod ephemeris;
pub mod error;

// Re-export for binary and library consumers
pub use chart::{ChartCalculator, ChartRequest, SajuChart};
pub use ephemeris::SolarEphemeris;
pub use error::CalculationError;
