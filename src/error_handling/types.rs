//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error raised by the URL normalizer.
///
/// This is the only error kind at the engine boundary. `analyze` never
/// returns it; it is converted into a synthetic "URL Format" finding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlFormatError {
    /// The scheme-defaulted input could not be parsed as a URL with a host.
    #[error("Invalid URL format '{input}': {reason}")]
    InvalidUrlFormat {
        /// The string handed to the URL parser (after scheme defaulting)
        input: String,
        /// Parser diagnostic
        reason: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for reachability probing.
///
/// These never surface from `check_reachability`; they are flattened into the
/// result's `error` string so the probe stays informational.
#[derive(Error, Debug)]
pub enum ReachabilityError {
    /// The URL could not be turned into a request target.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or protocol failure.
    #[error("{0}")]
    Network(#[from] ReqwestError),
}
