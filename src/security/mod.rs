//! Heuristic phishing analysis.
//!
//! This module is the scoring engine. It normalizes a raw URL string, runs a
//! fixed battery of independent checks over it and aggregates their weighted
//! contributions into a risk score and a safety verdict:
//! - HTTPS usage, IP-literal hosts, domain age heuristics
//! - Suspicious and phishing vocabulary, subdomain depth, URL length
//! - Shorteners, special characters, TLD allowlist, bad-reputation patterns
//!
//! Everything here is synchronous and free of I/O.

mod analysis;
mod checks;
mod normalize;
mod recommendations;
mod types;

pub use analysis::{analyze, assess, is_safe_verdict, Assessment, URL_FORMAT_TITLE};
pub use checks::run_battery;
pub(crate) use checks::{last_label, subdomain_count};
pub use normalize::{normalize_url, ParsedUrl};
pub use recommendations::{generate_recommendations, GENERIC_ADVICE};
pub use types::{CheckKind, CheckOutcome};
