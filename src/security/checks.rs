//! The check battery.
//!
//! Each check is a pure function of the parsed URL (and, for the length and
//! special-character checks, the raw input) returning one finding and an
//! unweighted risk contribution.

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::config::*;
use crate::models::RiskTier;
use crate::security::normalize::ParsedUrl;
use crate::security::types::{CheckKind, CheckOutcome};

/// Four consecutive digits, typically a registration year.
static FOUR_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("four-digit pattern is valid"));

impl CheckKind {
    /// Runs this check against a parsed URL.
    pub fn evaluate(&self, url: &ParsedUrl) -> CheckOutcome {
        let (finding, risk) = match self {
            CheckKind::Https => check_https(url),
            CheckKind::IpAddress => check_ip_address(url),
            CheckKind::DomainAge => check_domain_age(url),
            CheckKind::SuspiciousKeywords => check_suspicious_keywords(url),
            CheckKind::Subdomains => check_subdomains(url),
            CheckKind::UrlLength => check_url_length(url.original()),
            CheckKind::UrlShortener => check_url_shortener(url),
            CheckKind::SpecialCharacters => check_special_characters(url.original()),
            CheckKind::TopLevelDomain => check_top_level_domain(url),
            CheckKind::DomainReputation => check_domain_reputation(url),
        };
        CheckOutcome {
            kind: *self,
            finding,
            risk,
        }
    }
}

/// Runs every check in battery order.
pub fn run_battery(url: &ParsedUrl) -> Vec<CheckOutcome> {
    CheckKind::iter().map(|kind| kind.evaluate(url)).collect()
}

type Partial = (crate::models::AuditFinding, f64);

fn check_https(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::Https;
    if url.scheme().eq_ignore_ascii_case("https") {
        (
            kind.finding("Secure (HTTPS)".to_string(), true, RiskTier::Low),
            0.0,
        )
    } else {
        (
            kind.finding("Not Secure (HTTP)".to_string(), false, RiskTier::High),
            RISK_NO_HTTPS,
        )
    }
}

fn check_ip_address(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::IpAddress;
    let host = url.host();
    if url.is_ip_address() {
        (
            kind.finding(format!("IP Address ({host})"), false, RiskTier::High),
            RISK_IP_ADDRESS,
        )
    } else {
        (
            kind.finding(format!("Domain Name ({host})"), true, RiskTier::Low),
            0.0,
        )
    }
}

/// Heuristic stand-in for a registration-date lookup.
fn looks_recently_created(host: &str) -> bool {
    host.chars().count() < MIN_ESTABLISHED_HOST_LENGTH
        || NEW_DOMAIN_MARKERS.iter().any(|m| host.contains(m))
        || FOUR_DIGIT_RUN.is_match(host)
}

// IDN hosts are measured in their punycode form.
fn check_domain_age(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::DomainAge;
    let host = url.host().to_lowercase();
    if looks_recently_created(&host) {
        (
            kind.finding("Recently Created".to_string(), false, RiskTier::Medium),
            RISK_NEW_DOMAIN,
        )
    } else {
        (
            kind.finding("Established Domain".to_string(), true, RiskTier::Low),
            0.0,
        )
    }
}

fn check_suspicious_keywords(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::SuspiciousKeywords;
    let haystack = url.as_str().to_lowercase();
    let suspicious: Vec<&str> = SUSPICIOUS_WORDS
        .iter()
        .copied()
        .filter(|w| haystack.contains(w))
        .collect();
    let phishing: Vec<&str> = PHISHING_KEYWORDS
        .iter()
        .copied()
        .filter(|w| haystack.contains(w))
        .collect();

    if suspicious.is_empty() && phishing.is_empty() {
        return (
            kind.finding("No suspicious words detected".to_string(), true, RiskTier::Low),
            0.0,
        );
    }

    let (multiplier, tier) = if phishing.is_empty() {
        (RISK_SUSPICIOUS_KEYWORD_MULTIPLIER, RiskTier::Medium)
    } else {
        (RISK_PHISHING_KEYWORD_MULTIPLIER, RiskTier::High)
    };
    // Phishing vocabulary counts double
    let match_count = suspicious.len() + phishing.len() * 2;
    let found: Vec<&str> = suspicious.into_iter().chain(phishing).collect();

    (
        kind.finding(format!("Found: {}", found.join(", ")), false, tier),
        multiplier * match_count as f64,
    )
}

/// Label count minus the registrable pair; negative for single-label hosts.
pub(crate) fn subdomain_count(host: &str) -> i64 {
    host.split('.').count() as i64 - 2
}

fn check_subdomains(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::Subdomains;
    let count = subdomain_count(url.host());
    let excessive = count > MAX_SUBDOMAINS;
    let tier = if count > HIGH_RISK_SUBDOMAINS {
        RiskTier::High
    } else if excessive {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };
    let risk = if excessive {
        RISK_PER_SUBDOMAIN * count as f64
    } else {
        0.0
    };
    (
        kind.finding(format!("{count} subdomains detected"), !excessive, tier),
        risk,
    )
}

fn check_url_length(raw: &str) -> Partial {
    let kind = CheckKind::UrlLength;
    let length = raw.chars().count();
    let (tier, risk) = if length > VERY_LONG_URL_LENGTH {
        (RiskTier::High, RISK_VERY_LONG_URL)
    } else if length > MAX_URL_LENGTH {
        (RiskTier::Medium, RISK_LONG_URL)
    } else {
        (RiskTier::Low, 0.0)
    };
    (
        kind.finding(
            format!("{length} characters"),
            length <= MAX_URL_LENGTH,
            tier,
        ),
        risk,
    )
}

fn check_url_shortener(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::UrlShortener;
    let host = url.host().to_lowercase();
    if URL_SHORTENERS.iter().any(|s| host.contains(s)) {
        (
            kind.finding(
                format!("URL Shortener Detected ({host})"),
                false,
                RiskTier::High,
            ),
            RISK_URL_SHORTENER,
        )
    } else {
        (
            kind.finding("Direct URL".to_string(), true, RiskTier::Low),
            0.0,
        )
    }
}

fn check_special_characters(raw: &str) -> Partial {
    let kind = CheckKind::SpecialCharacters;
    let found: Vec<String> = SUSPICIOUS_SPECIAL_CHARACTERS
        .iter()
        .filter(|c| raw.contains(**c))
        .map(|c| c.to_string())
        .collect();

    if found.is_empty() {
        return (
            kind.finding(
                "No suspicious special characters".to_string(),
                true,
                RiskTier::Low,
            ),
            0.0,
        );
    }

    let tier = if found.len() > HIGH_RISK_SPECIAL_CHARACTERS {
        RiskTier::High
    } else {
        RiskTier::Medium
    };
    (
        kind.finding(format!("Found: {}", found.join(", ")), false, tier),
        RISK_PER_SPECIAL_CHARACTER * found.len() as f64,
    )
}

/// Text after the last dot of the host, or the whole host if it has none.
pub(crate) fn last_label(host: &str) -> &str {
    host.rsplit('.').next().unwrap_or(host)
}

fn check_top_level_domain(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::TopLevelDomain;
    let tld = last_label(url.host());
    if LEGITIMATE_TLDS.contains(&tld.to_lowercase().as_str()) {
        (
            kind.finding(format!("TLD: {tld}"), true, RiskTier::Low),
            0.0,
        )
    } else {
        (
            kind.finding(format!("TLD: {tld}"), false, RiskTier::Medium),
            RISK_UNKNOWN_TLD,
        )
    }
}

fn check_domain_reputation(url: &ParsedUrl) -> Partial {
    let kind = CheckKind::DomainReputation;
    let host = url.host().to_lowercase();
    if KNOWN_BAD_DOMAIN_PATTERNS.iter().any(|p| host.contains(p)) {
        (
            kind.finding(
                "Suspicious domain detected".to_string(),
                false,
                RiskTier::High,
            ),
            RISK_BAD_REPUTATION,
        )
    } else {
        (
            kind.finding("No known issues".to_string(), true, RiskTier::Low),
            0.0,
        )
    }
}
