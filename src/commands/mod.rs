//! Command-line command handlers for sajur.
//!
//! This module contains implementations for one-shot CLI commands besides
//! the main chart calculation. Each command is implemented in its own
//! submodule to keep the code organized.

pub mod help;
pub mod hours;
pub mod terms;
