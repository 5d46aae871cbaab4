//! Network reachability probing.
//!
//! An optional enrichment that sends one HEAD request per URL and records the
//! status line and a few headers. It runs independently of the scoring engine
//! and never influences the verdict.

mod probe;
mod types;

pub use probe::check_reachability;
pub use types::ReachabilityResult;
