//! Configuration constants.
//!
//! This module defines the fixed tables the heuristic engine is calibrated
//! against: check weights, risk increments, tier thresholds and the keyword,
//! TLD, shortener and reputation lists. It also holds the operational
//! defaults used by the CLI runner and the reachability probe.

use std::time::Duration;

// Check weights.
//
// These sum to 1.35, not 1.0, and are never renormalized. The safety
// threshold below is expressed on the same scale.
pub const WEIGHT_HTTPS: f64 = 0.20;
pub const WEIGHT_IP_ADDRESS: f64 = 0.25;
pub const WEIGHT_DOMAIN_AGE: f64 = 0.15;
pub const WEIGHT_SUSPICIOUS_KEYWORDS: f64 = 0.15;
pub const WEIGHT_SUBDOMAINS: f64 = 0.10;
pub const WEIGHT_URL_LENGTH: f64 = 0.05;
pub const WEIGHT_URL_SHORTENER: f64 = 0.10;
pub const WEIGHT_SPECIAL_CHARACTERS: f64 = 0.05;
pub const WEIGHT_TLD: f64 = 0.10;
pub const WEIGHT_DOMAIN_REPUTATION: f64 = 0.20;

// Risk increments applied before weighting when a check fails.
pub const RISK_NO_HTTPS: f64 = 0.25;
pub const RISK_IP_ADDRESS: f64 = 0.30;
pub const RISK_NEW_DOMAIN: f64 = 0.15;
/// Multiplier per keyword hit when at least one explicit phishing keyword matched.
pub const RISK_PHISHING_KEYWORD_MULTIPLIER: f64 = 0.40;
/// Multiplier per keyword hit when only generic suspicious words matched.
pub const RISK_SUSPICIOUS_KEYWORD_MULTIPLIER: f64 = 0.15;
/// Risk per subdomain once the subdomain count exceeds the allowed maximum.
pub const RISK_PER_SUBDOMAIN: f64 = 0.10;
pub const RISK_LONG_URL: f64 = 0.05;
pub const RISK_VERY_LONG_URL: f64 = 0.10;
pub const RISK_URL_SHORTENER: f64 = 0.20;
/// Risk per distinct suspicious special character found.
pub const RISK_PER_SPECIAL_CHARACTER: f64 = 0.05;
pub const RISK_UNKNOWN_TLD: f64 = 0.15;
pub const RISK_BAD_REPUTATION: f64 = 0.25;
/// Fixed risk recorded when the input cannot be parsed as a URL.
pub const RISK_INVALID_URL: f64 = 0.30;

// Thresholds.
/// Hosts shorter than this are treated as recently registered.
pub const MIN_ESTABLISHED_HOST_LENGTH: usize = 15;
/// More subdomains than this fails the subdomain check.
pub const MAX_SUBDOMAINS: i64 = 2;
/// More subdomains than this raises the tier to High.
pub const HIGH_RISK_SUBDOMAINS: i64 = 4;
/// URLs longer than this (in characters) fail the length check.
pub const MAX_URL_LENGTH: usize = 75;
/// URLs longer than this are High tier.
pub const VERY_LONG_URL_LENGTH: usize = 150;
/// More distinct special characters than this raises the tier to High.
pub const HIGH_RISK_SPECIAL_CHARACTERS: usize = 2;

// Verdict.
/// Raw (unclamped) risk at or below which a URL may be considered safe.
pub const SAFE_RISK_THRESHOLD: f64 = 0.35;
/// Minimum share of passed checks required for a safe verdict.
pub const MIN_PASS_RATIO: f64 = 0.7;

/// Scheme prepended to inputs that do not already start with `http`.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Generic words that frequently appear in phishing lures.
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "verify",
    "urgent",
    "suspended",
    "expired",
    "confirm",
    "update",
    "secure",
    "bank",
    "paypal",
    "amazon",
    "microsoft",
    "google",
    "login",
    "signin",
    "account",
    "password",
    "credit",
    "card",
];

/// Explicit phishing vocabulary. Each hit counts double.
pub const PHISHING_KEYWORDS: &[&str] = &[
    "phishing",
    "scam",
    "fake",
    "fraud",
    "malware",
    "virus",
    "hack",
    "compromised",
    "spoof",
    "credential",
];

/// Substrings that suggest a temporary or throwaway domain.
pub const NEW_DOMAIN_MARKERS: &[&str] = &["temp", "new", "site"];

/// Top-level domains considered common and legitimate.
pub const LEGITIMATE_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "co", "io", "ai", "biz", "info",
];

/// Known URL shortener domains, matched as host substrings.
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "short.link",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "adf.ly",
];

/// Characters that are unusual in legitimate URLs.
pub const SUSPICIOUS_SPECIAL_CHARACTERS: &[char] = &['%', '@', '#', '$', '^', '&', '*', '!', '~'];

/// Host substrings with a known bad reputation.
pub const KNOWN_BAD_DOMAIN_PATTERNS: &[&str] = &["malicious", "phish", "scam", "fake"];

/// TLDs frequently abused for throwaway registrations.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    "tk", "ml", "ga", "cf", "click", "download", "zip", "review",
];

// Reachability probe
/// TCP connect timeout for the HEAD probe
pub const PROBE_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default overall request timeout for the HEAD probe, in seconds
pub const PROBE_TIMEOUT_SECS: u64 = 5;
/// Default maximum number of concurrent reachability probes
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default User-Agent string for reachability probes.
pub const DEFAULT_USER_AGENT: &str = concat!("phish_audit/", env!("CARGO_PKG_VERSION"));

/// Exit code used when `--fail-on unsafe` is set and an unsafe URL was found.
pub const EXIT_CODE_UNSAFE: i32 = 2;
