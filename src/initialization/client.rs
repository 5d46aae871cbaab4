//! HTTP client initialization.
//!
//! This module provides the client used by the reachability probe.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, PROBE_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for reachability probes.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Request timeout from the configuration
/// - A short fixed connect timeout
/// - Redirects disabled, so a 3xx is reported as-is with its `Location`
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(PROBE_CONNECT_TIMEOUT)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
