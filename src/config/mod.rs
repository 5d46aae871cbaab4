//! Application configuration and constants.
//!
//! This module provides:
//! - The check weights, thresholds and keyword lists the engine is calibrated against
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
