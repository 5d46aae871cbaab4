//! End-to-end tests for the scoring engine through the public `analyze` API.

use phish_audit::security::GENERIC_ADVICE;
use phish_audit::{analyze, AnalysisResult, AuditFinding, RiskTier};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn finding<'a>(result: &'a AnalysisResult, title: &str) -> &'a AuditFinding {
    result
        .audit_report
        .findings
        .iter()
        .find(|f| f.title == title)
        .unwrap_or_else(|| panic!("missing finding {title}"))
}

/// Builds an https URL on an established host padded to exactly `len` characters.
fn url_of_length(len: usize) -> String {
    let base = "https://www.example.com/";
    assert!(len >= base.len());
    format!("{base}{}", "a".repeat(len - base.len()))
}

#[test]
fn test_fully_passing_url() {
    let result = analyze("https://www.example.com");
    assert!(result.is_safe);
    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.audit_report.overall_score, 1.0);
    assert_eq!(result.audit_report.total_checks, 10);
    assert_eq!(result.audit_report.passed_checks, 10);
    assert_eq!(result.audit_report.score_percentage(), 100);
    assert_eq!(result.risk_label(), "Low Risk");
    assert_eq!(result.audit_report.recommendations, GENERIC_ADVICE.to_vec());
}

#[test]
fn test_short_host_fails_domain_age_but_stays_safe() {
    let result = analyze("https://example.com");
    assert!(result.is_safe);
    assert!(approx(result.risk_score, 0.0225));
    assert_eq!(result.audit_report.passed_checks, 9);

    let age = finding(&result, "Domain Age");
    assert!(!age.passed);
    assert_eq!(age.risk_tier, RiskTier::Medium);

    assert_eq!(
        result.audit_report.recommendations,
        vec!["Verify the domain name carefully - phishers often use similar-looking domains."]
    );
}

#[test]
fn test_ip_literal_login_lure() {
    let result = analyze("http://192.168.1.1/login-verify-urgent");
    assert!(!result.is_safe);
    // 0.05 https + 0.075 ip + 0.0225 age + 0.0675 keywords + 0.015 tld
    assert!(approx(result.risk_score, 0.23), "risk = {}", result.risk_score);
    assert_eq!(result.audit_report.passed_checks, 5);

    let ip = finding(&result, "Domain vs IP Address");
    assert!(!ip.passed);
    assert_eq!(ip.observed_value, "IP Address (192.168.1.1)");

    let keywords = finding(&result, "Suspicious Keywords");
    assert_eq!(keywords.risk_tier, RiskTier::Medium);
    assert_eq!(keywords.observed_value, "Found: verify, urgent, login");

    assert_eq!(
        result.audit_report.recommendations,
        vec![
            "Always look for HTTPS (secure) connections when entering sensitive information.",
            "Verify the domain name carefully - phishers often use similar-looking domains.",
            "Be cautious of URLs using IP addresses instead of domain names.",
            "Watch out for suspicious words like 'verify', 'urgent', 'suspended' in URLs.",
        ]
    );
}

#[test]
fn test_unparsable_url_yields_single_format_finding() {
    let result = analyze("http://");
    let report = &result.audit_report;
    assert_eq!(report.total_checks, 1);
    assert_eq!(report.passed_checks, 0);
    assert_eq!(report.findings[0].title, "URL Format");
    assert_eq!(report.findings[0].observed_value, "Invalid");
    assert!(approx(result.risk_score, 0.30));
    assert!(approx(report.overall_score, 0.70));
    // 0.30 <= 0.35 and floor(1 * 0.7) == 0 passed checks required
    assert!(result.is_safe);
    assert_eq!(report.recommendations, GENERIC_ADVICE.to_vec());
}

#[test]
fn test_subdomain_tiers() {
    let three = analyze("https://a.b.c.example.com");
    let sub = finding(&three, "Subdomain Analysis");
    assert!(!sub.passed);
    assert_eq!(sub.observed_value, "3 subdomains detected");
    assert_eq!(sub.risk_tier, RiskTier::Medium);

    let four = analyze("https://a.b.c.d.example.com");
    let sub = finding(&four, "Subdomain Analysis");
    assert_eq!(sub.observed_value, "4 subdomains detected");
    assert_eq!(sub.risk_tier, RiskTier::Medium);

    let five = analyze("https://a.b.c.d.e.example.com");
    assert_eq!(
        finding(&five, "Subdomain Analysis").risk_tier,
        RiskTier::High
    );

    assert!(three
        .audit_report
        .recommendations
        .iter()
        .any(|r| r.starts_with("Multiple subdomains")));
}

#[test]
fn test_url_length_boundaries() {
    let cases = [
        (75, true, RiskTier::Low),
        (76, false, RiskTier::Medium),
        (150, false, RiskTier::Medium),
        (151, false, RiskTier::High),
    ];
    for (len, passed, tier) in cases {
        let url = url_of_length(len);
        assert_eq!(url.chars().count(), len);
        let result = analyze(&url);
        let length = finding(&result, "URL Length");
        assert_eq!(length.passed, passed, "length {len}");
        assert_eq!(length.risk_tier, tier, "length {len}");
        assert_eq!(length.observed_value, format!("{len} characters"));
    }
}

#[test]
fn test_scheme_less_input_defaults_to_http() {
    let result = analyze("www.example.com");
    let https = finding(&result, "HTTPS Security");
    assert!(!https.passed);
    assert_eq!(https.observed_value, "Not Secure (HTTP)");
    assert_eq!(result.url, "www.example.com");
}

#[test]
fn test_shortener_and_reputation() {
    let short = analyze("https://bit.ly/abc");
    assert!(!finding(&short, "URL Shortener").passed);

    let bad = analyze("https://www.phish-example.com");
    let reputation = finding(&bad, "Domain Reputation");
    assert!(!reputation.passed);
    assert_eq!(reputation.observed_value, "Suspicious domain detected");
}

#[test]
fn test_bad_pattern_in_host_raises_risk() {
    let clean = analyze("https://www.examplestore.com");
    let flagged = analyze("https://www.examplephishstore.com");
    assert_eq!(clean.risk_score, 0.0);
    assert!(flagged.risk_score > clean.risk_score);
    assert!(approx(flagged.risk_score, 0.05));
    assert!(!finding(&flagged, "Domain Reputation").passed);
}

#[test]
fn test_repeated_analysis_is_stable() {
    let url = "http://secure-paypal.account-update.tk/verify?id=1&x=%20";
    let first = analyze(url);
    let second = analyze(url);
    assert!(first.same_assessment(&second));
}

#[test]
fn test_phishing_keyword_in_path_raises_risk() {
    let base = analyze("https://www.example.com/account");
    let worse = analyze("https://www.example.com/account/phishing");
    assert!(worse.risk_score > base.risk_score);
    assert_eq!(
        finding(&worse, "Suspicious Keywords").risk_tier,
        RiskTier::High
    );
}

#[test]
fn test_report_invariants_on_mixed_inputs() {
    let inputs = [
        "",
        "   ",
        "not a url at all",
        "ftp://example.com",
        "https://www.example.com",
        "HTTP://WWW.EXAMPLE.COM/LOGIN",
        "http://[2001:db8::1]/",
        "http://user@host.example.org:8080/p?q=1#frag",
        "http://192.168.1.1/phishing-scam-fake-fraud-malware-virus-hack/login@verify!",
    ];
    for input in inputs {
        let result = analyze(input);
        let report = &result.audit_report;
        assert!(report.total_checks >= 1, "{input}");
        assert_eq!(report.total_checks, report.findings.len(), "{input}");
        assert_eq!(
            report.passed_checks,
            report.findings.iter().filter(|f| f.passed).count(),
            "{input}"
        );
        assert!((0.0..=1.0).contains(&result.risk_score), "{input}");
        assert!(approx(report.overall_score, 1.0 - result.risk_score), "{input}");
        assert!(!report.recommendations.is_empty(), "{input}");
        assert_eq!(result.url, input);
    }
}
