//! Main application modules.
//!
//! This module provides input preparation and run statistics used by the
//! CLI runner.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::{collect_inputs, prepare_input};
pub use statistics::{print_summary, AuditSummary};
