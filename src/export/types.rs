//! Export types.

use serde::Serialize;

use crate::models::AnalysisResult;
use crate::reachability::ReachabilityResult;

/// One line of output: the engine result plus the optional probe outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachability: Option<ReachabilityResult>,
}

impl AuditRecord {
    pub fn new(result: AnalysisResult, reachability: Option<ReachabilityResult>) -> Self {
        Self {
            result,
            reachability,
        }
    }

    /// Recommendations to show: hidden for safe results unless forced.
    pub fn visible_recommendations(&self, always: bool) -> &[String] {
        if self.result.is_safe && !always {
            &[]
        } else {
            &self.result.audit_report.recommendations
        }
    }
}
