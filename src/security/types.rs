//! Check kinds and their static metadata.

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::*;
use crate::models::{AuditCategory, AuditFinding, RiskTier};

/// The heuristic checks, declared in battery order.
///
/// Iterating with `CheckKind::iter()` yields the fixed order findings appear
/// in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum CheckKind {
    Https,
    IpAddress,
    DomainAge,
    SuspiciousKeywords,
    Subdomains,
    UrlLength,
    UrlShortener,
    SpecialCharacters,
    TopLevelDomain,
    DomainReputation,
}

impl CheckKind {
    /// Finding title; stable and unique per kind.
    pub fn title(&self) -> &'static str {
        match self {
            CheckKind::Https => "HTTPS Security",
            CheckKind::IpAddress => "Domain vs IP Address",
            CheckKind::DomainAge => "Domain Age",
            CheckKind::SuspiciousKeywords => "Suspicious Keywords",
            CheckKind::Subdomains => "Subdomain Analysis",
            CheckKind::UrlLength => "URL Length",
            CheckKind::UrlShortener => "URL Shortener",
            CheckKind::SpecialCharacters => "Special Characters",
            CheckKind::TopLevelDomain => "Top-Level Domain",
            CheckKind::DomainReputation => "Domain Reputation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckKind::Https => "Checks if the URL uses secure HTTPS protocol",
            CheckKind::IpAddress => {
                "Legitimate sites typically use domain names, not IP addresses"
            }
            CheckKind::DomainAge => {
                "Newer domains or those with temporary patterns are more likely to be used for phishing"
            }
            CheckKind::SuspiciousKeywords => "Checks for common phishing-related words in the URL",
            CheckKind::Subdomains => "Multiple subdomains can indicate phishing attempts",
            CheckKind::UrlLength => "Long URLs are often used to hide phishing attempts",
            CheckKind::UrlShortener => "Shortened URLs can hide the actual destination",
            CheckKind::SpecialCharacters => {
                "Unusual special characters can indicate phishing attempts"
            }
            CheckKind::TopLevelDomain => "Checks if the URL uses a common, legitimate TLD",
            CheckKind::DomainReputation => "Checks domain against known malicious patterns",
        }
    }

    pub fn category(&self) -> AuditCategory {
        match self {
            CheckKind::Https => AuditCategory::Security,
            CheckKind::IpAddress
            | CheckKind::DomainAge
            | CheckKind::Subdomains
            | CheckKind::TopLevelDomain => AuditCategory::Domain,
            CheckKind::SuspiciousKeywords => AuditCategory::Content,
            CheckKind::UrlLength | CheckKind::UrlShortener | CheckKind::SpecialCharacters => {
                AuditCategory::Technical
            }
            CheckKind::DomainReputation => AuditCategory::Reputation,
        }
    }

    /// Multiplier applied to the check's raw risk before summing.
    pub fn weight(&self) -> f64 {
        match self {
            CheckKind::Https => WEIGHT_HTTPS,
            CheckKind::IpAddress => WEIGHT_IP_ADDRESS,
            CheckKind::DomainAge => WEIGHT_DOMAIN_AGE,
            CheckKind::SuspiciousKeywords => WEIGHT_SUSPICIOUS_KEYWORDS,
            CheckKind::Subdomains => WEIGHT_SUBDOMAINS,
            CheckKind::UrlLength => WEIGHT_URL_LENGTH,
            CheckKind::UrlShortener => WEIGHT_URL_SHORTENER,
            CheckKind::SpecialCharacters => WEIGHT_SPECIAL_CHARACTERS,
            CheckKind::TopLevelDomain => WEIGHT_TLD,
            CheckKind::DomainReputation => WEIGHT_DOMAIN_REPUTATION,
        }
    }

    /// Builds this kind's finding from the measured parts.
    pub(crate) fn finding(
        &self,
        observed_value: String,
        passed: bool,
        risk_tier: RiskTier,
    ) -> AuditFinding {
        AuditFinding {
            title: self.title().to_string(),
            description: self.description().to_string(),
            observed_value,
            passed,
            risk_tier,
            category: self.category(),
        }
    }
}

/// A finding together with the check's unweighted risk contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub finding: AuditFinding,
    /// Raw contribution before `kind.weight()` is applied
    pub risk: f64,
}

impl CheckOutcome {
    pub fn weighted_risk(&self) -> f64 {
        self.risk * self.kind.weight()
    }
}
