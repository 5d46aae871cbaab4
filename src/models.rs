//! Value types produced by one analysis call.
//!
//! Every type here is created fresh per call and owned by the caller. None of
//! them carry presentation details such as colors or icons; renderers map the
//! semantic tier and category to whatever they display.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Ordered severity attached to a finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIterMacro,
)]
#[serde(rename_all = "camelCase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Human-readable label, e.g. "High Risk".
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
            RiskTier::Critical => "Critical Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Area a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "camelCase")]
pub enum AuditCategory {
    Security,
    Domain,
    Content,
    Technical,
    Reputation,
}

impl AuditCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AuditCategory::Security => "Security",
            AuditCategory::Domain => "Domain Analysis",
            AuditCategory::Content => "Content Analysis",
            AuditCategory::Technical => "Technical Details",
            AuditCategory::Reputation => "Reputation Analysis",
        }
    }
}

impl fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One check's result.
///
/// `title` is stable per check kind and unique within a report, so consumers
/// can use it as the identity key when comparing two reports: findings with
/// the same title occupy the same slot, and the slot changed iff any other
/// field differs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub title: String,
    pub description: String,
    pub observed_value: String,
    pub passed: bool,
    pub risk_tier: RiskTier,
    pub category: AuditCategory,
}

/// Ordered findings plus the derived summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Findings in check battery order
    pub findings: Vec<AuditFinding>,
    /// Advisories, each at most once
    pub recommendations: Vec<String>,
    /// `1 - risk_score`, in [0, 1]
    pub overall_score: f64,
    pub total_checks: usize,
    pub passed_checks: usize,
}

impl AuditReport {
    /// Share of passed checks as a truncated percentage (0-100).
    pub fn score_percentage(&self) -> u32 {
        if self.total_checks == 0 {
            return 0;
        }
        ((self.passed_checks as f64 / self.total_checks as f64) * 100.0) as u32
    }

    /// Findings that did not pass, in report order.
    pub fn failed_findings(&self) -> impl Iterator<Item = &AuditFinding> {
        self.findings.iter().filter(|f| !f.passed)
    }
}

/// The outcome of `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The raw input, exactly as given
    pub url: String,
    pub is_safe: bool,
    /// Aggregate risk clamped to [0, 1]
    pub risk_score: f64,
    pub audit_report: AuditReport,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Coarse band of the clamped risk score.
    pub fn risk_label(&self) -> &'static str {
        match self.risk_score {
            s if s <= 0.3 => "Low Risk",
            s if s <= 0.6 => "Medium Risk",
            s if s <= 0.8 => "High Risk",
            _ => "Very High Risk",
        }
    }

    pub fn risk_description(&self) -> &'static str {
        match self.risk_score {
            s if s <= 0.3 => "This URL appears legitimate with minimal risk indicators.",
            s if s <= 0.6 => {
                "This URL has some suspicious characteristics but may be legitimate."
            }
            s if s <= 0.8 => {
                "This URL shows several phishing indicators and should be approached with caution."
            }
            _ => "This URL exhibits strong phishing characteristics and is likely malicious.",
        }
    }

    /// Same findings, score and verdict; ignores the timestamp.
    pub fn same_assessment(&self, other: &AnalysisResult) -> bool {
        self.url == other.url
            && self.is_safe == other.is_safe
            && self.risk_score == other.risk_score
            && self.audit_report == other.audit_report
    }
}
