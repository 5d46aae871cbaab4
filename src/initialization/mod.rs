//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources the CLI
//! runner needs:
//! - Logger (plain or JSON)
//! - HTTP client for reachability probes
//! - Concurrency limiter for probes
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_probe_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// A zero count is raised to one so the runner can always make progress.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent operations allowed
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}
