//! Error handling.
//!
//! This module provides the typed errors used across the crate:
//! - **UrlFormatError**: the single engine-boundary error, absorbed by `analyze`
//! - **InitializationError**: logger and HTTP client setup failures
//! - **ReachabilityError**: probe failures, reported as strings on the probe result

mod types;

// Re-export public API
pub use types::{InitializationError, ReachabilityError, UrlFormatError};
