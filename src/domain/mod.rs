//! Domain extraction utilities.
//!
//! Thin helpers over the URL normalizer for callers that only need one piece
//! of a URL:
//! - `extract_host()` - Extracts the host from a (possibly scheme-less) URL
//! - `top_level_domain()` - Last label of the host
//! - `is_valid_url()` - Whether the normalizer accepts the string
//! - `has_suspicious_tld()` - Whether the TLD is commonly abused

use anyhow::{Context, Result};

use crate::config::SUSPICIOUS_TLDS;
use crate::security::{last_label, normalize_url, subdomain_count};

/// Extracts the host from a URL, defaulting the scheme like the engine does.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or has no host.
pub fn extract_host(url: &str) -> Result<String> {
    let parsed =
        normalize_url(url).with_context(|| format!("Failed to extract host from URL: {url}"))?;
    Ok(parsed.host().to_string())
}

/// Returns the top-level domain (text after the last dot of the host).
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or has no host.
pub fn top_level_domain(url: &str) -> Result<String> {
    let host = extract_host(url)?;
    Ok(last_label(&host).to_string())
}

/// Number of labels beyond the registrable pair (`a.b.example.com` has 2).
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or has no host.
pub fn count_subdomains(url: &str) -> Result<i64> {
    let host = extract_host(url)?;
    Ok(subdomain_count(&host))
}

/// Returns true if the normalizer accepts `url`.
pub fn is_valid_url(url: &str) -> bool {
    normalize_url(url).is_ok()
}

/// Returns true if the URL's TLD is in the commonly-abused list.
///
/// Unparsable URLs are not flagged.
pub fn has_suspicious_tld(url: &str) -> bool {
    top_level_domain(url)
        .map(|tld| SUSPICIOUS_TLDS.contains(&tld.to_lowercase().as_str()))
        .unwrap_or(false)
}
