//! Aggregation and the `analyze` entry point.

use chrono::Utc;
use log::debug;

use crate::config::{MIN_PASS_RATIO, RISK_INVALID_URL, SAFE_RISK_THRESHOLD};
use crate::models::{AnalysisResult, AuditCategory, AuditFinding, AuditReport, RiskTier};
use crate::security::checks::run_battery;
use crate::security::normalize::normalize_url;
use crate::security::recommendations::generate_recommendations;

/// Title of the finding substituted when the input cannot be parsed.
pub const URL_FORMAT_TITLE: &str = "URL Format";

/// Findings with their summed, unclamped risk.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub findings: Vec<AuditFinding>,
    /// Weighted sum before clamping; may exceed 1.0
    pub raw_risk: f64,
}

fn invalid_url_finding() -> AuditFinding {
    AuditFinding {
        title: URL_FORMAT_TITLE.to_string(),
        description: "Invalid URL format detected".to_string(),
        observed_value: "Invalid".to_string(),
        passed: false,
        risk_tier: RiskTier::High,
        category: AuditCategory::Technical,
    }
}

/// Normalizes `raw` and runs the battery, or substitutes the single
/// "URL Format" finding when normalization fails.
pub fn assess(raw: &str) -> Assessment {
    match normalize_url(raw) {
        Ok(url) => {
            let outcomes = run_battery(&url);
            let raw_risk = outcomes.iter().map(|o| o.weighted_risk()).sum();
            Assessment {
                findings: outcomes.into_iter().map(|o| o.finding).collect(),
                raw_risk,
            }
        }
        Err(e) => {
            debug!("{e}");
            Assessment {
                findings: vec![invalid_url_finding()],
                raw_risk: RISK_INVALID_URL,
            }
        }
    }
}

/// Safety verdict over the unclamped risk.
///
/// Both conditions must hold: a low score with too many individual failures is
/// unsafe, as is a high score with mostly passing checks.
///
/// The comparison is exact on the f64 sum, so contributions that add up to
/// 0.35 in decimal can land a rounding step above the threshold and be unsafe.
pub fn is_safe_verdict(raw_risk: f64, passed_checks: usize, total_checks: usize) -> bool {
    let required = (total_checks as f64 * MIN_PASS_RATIO).floor() as usize;
    raw_risk <= SAFE_RISK_THRESHOLD && passed_checks >= required
}

/// Analyzes a URL string and returns the full risk assessment.
///
/// Total for any input: parse failures become a synthetic high-risk finding
/// instead of an error. Rejecting empty input is the caller's job.
///
/// # Example
///
/// ```
/// let result = phish_audit::analyze("https://www.example.com");
/// assert!(result.is_safe);
/// assert_eq!(result.audit_report.total_checks, 10);
/// ```
pub fn analyze(raw: &str) -> AnalysisResult {
    let Assessment { findings, raw_risk } = assess(raw);

    let total_checks = findings.len();
    let passed_checks = findings.iter().filter(|f| f.passed).count();
    let is_safe = is_safe_verdict(raw_risk, passed_checks, total_checks);
    let risk_score = raw_risk.clamp(0.0, 1.0);
    let recommendations = generate_recommendations(&findings);

    debug!(
        "Analyzed {raw}: raw_risk={raw_risk:.4}, passed={passed_checks}/{total_checks}, safe={is_safe}"
    );

    AnalysisResult {
        url: raw.to_string(),
        is_safe,
        risk_score,
        audit_report: AuditReport {
            findings,
            recommendations,
            overall_score: 1.0 - risk_score,
            total_checks,
            passed_checks,
        },
        timestamp: Utc::now(),
    }
}
