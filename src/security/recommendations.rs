//! Advisory generation from failed findings.

use crate::models::AuditFinding;

/// Title patterns, in output order, with the advisory each contributes.
const ADVISORIES: &[(&str, &str)] = &[
    (
        "https",
        "Always look for HTTPS (secure) connections when entering sensitive information.",
    ),
    (
        "domain",
        "Verify the domain name carefully - phishers often use similar-looking domains.",
    ),
    (
        "ip address",
        "Be cautious of URLs using IP addresses instead of domain names.",
    ),
    (
        "suspicious",
        "Watch out for suspicious words like 'verify', 'urgent', 'suspended' in URLs.",
    ),
    (
        "subdomain",
        "Multiple subdomains can be a sign of phishing - verify the main domain.",
    ),
];

/// Emitted when no failed finding matches any pattern.
pub const GENERIC_ADVICE: [&str; 3] = [
    "Always verify URLs before clicking, especially from unknown sources.",
    "Check the sender's email address and look for spelling errors.",
    "When in doubt, navigate to the website directly instead of clicking links.",
];

/// Builds the recommendation list for a set of findings.
///
/// A pattern contributes its advisory once if it matches the title of any
/// failed finding (case-insensitive substring), so the output never holds
/// duplicates. The list is computed regardless of the verdict; hiding it for
/// safe results is up to the caller.
pub fn generate_recommendations(findings: &[AuditFinding]) -> Vec<String> {
    let failed_titles: Vec<String> = findings
        .iter()
        .filter(|f| !f.passed)
        .map(|f| f.title.to_lowercase())
        .collect();

    let recommendations: Vec<String> = ADVISORIES
        .iter()
        .filter(|(pattern, _)| failed_titles.iter().any(|t| t.contains(pattern)))
        .map(|(_, advice)| advice.to_string())
        .collect();

    if recommendations.is_empty() {
        return GENERIC_ADVICE.iter().map(|s| s.to_string()).collect();
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditCategory, RiskTier};

    fn finding(title: &str, passed: bool) -> AuditFinding {
        AuditFinding {
            title: title.to_string(),
            description: String::new(),
            observed_value: String::new(),
            passed,
            risk_tier: RiskTier::Low,
            category: AuditCategory::Technical,
        }
    }

    #[test]
    fn test_all_passing_yields_generic_advice() {
        let recs = generate_recommendations(&[finding("HTTPS Security", true)]);
        assert_eq!(recs, GENERIC_ADVICE.to_vec());
    }

    #[test]
    fn test_unmatched_failures_yield_generic_advice() {
        let recs = generate_recommendations(&[
            finding("URL Length", false),
            finding("Special Characters", false),
        ]);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], GENERIC_ADVICE[0]);
    }

    #[test]
    fn test_each_pattern_fires_once() {
        // Three failed titles contain "Domain"; the advisory appears once
        let recs = generate_recommendations(&[
            finding("Domain Age", false),
            finding("Top-Level Domain", false),
            finding("Domain Reputation", false),
        ]);
        assert_eq!(recs, vec![ADVISORIES[1].1.to_string()]);
    }

    #[test]
    fn test_ip_title_fires_domain_and_ip_advice_in_pattern_order() {
        let recs = generate_recommendations(&[
            finding("Domain vs IP Address", false),
            finding("HTTPS Security", false),
        ]);
        assert_eq!(
            recs,
            vec![
                ADVISORIES[0].1.to_string(),
                ADVISORIES[1].1.to_string(),
                ADVISORIES[2].1.to_string(),
            ]
        );
    }

    #[test]
    fn test_passed_findings_are_ignored() {
        let recs = generate_recommendations(&[
            finding("Suspicious Keywords", true),
            finding("Subdomain Analysis", false),
        ]);
        // "Subdomain Analysis" also contains "domain"
        assert_eq!(
            recs,
            vec![ADVISORIES[1].1.to_string(), ADVISORIES[4].1.to_string()]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let recs = generate_recommendations(&[finding("suspicious keywords", false)]);
        assert_eq!(recs, vec![ADVISORIES[3].1.to_string()]);
    }
}
