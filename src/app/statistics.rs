//! Run summary tracking and printing.

use log::info;

use crate::config::{FailOn, EXIT_CODE_UNSAFE};
use crate::export::AuditRecord;

/// Summary of a completed audit run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSummary {
    /// Number of inputs analyzed
    pub total_urls: usize,
    /// Inputs judged safe
    pub safe: usize,
    /// Inputs judged unsafe
    pub unsafe_urls: usize,
    /// Inputs the normalizer could not parse (counted in `safe`/`unsafe_urls` too)
    pub invalid: usize,
    /// Probes that got any HTTP response (only when probing is enabled)
    pub reachable: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl AuditSummary {
    /// Folds one record into the running totals.
    pub fn record(&mut self, record: &AuditRecord) {
        self.total_urls += 1;
        if record.result.is_safe {
            self.safe += 1;
        } else {
            self.unsafe_urls += 1;
        }
        if record
            .result
            .audit_report
            .findings
            .iter()
            .any(|f| f.title == crate::security::URL_FORMAT_TITLE)
        {
            self.invalid += 1;
        }
        if record
            .reachability
            .as_ref()
            .is_some_and(|r| r.response_code >= 0)
        {
            self.reachable += 1;
        }
    }

    /// Process exit code for this run under the given failure policy.
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        match fail_on {
            FailOn::Unsafe if self.unsafe_urls > 0 => EXIT_CODE_UNSAFE,
            _ => 0,
        }
    }
}

/// Logs a one-line summary of the run.
pub fn print_summary(summary: &AuditSummary) {
    info!(
        "Analyzed {} URL{} ({} safe, {} unsafe, {} invalid) in {:.3}s",
        summary.total_urls,
        if summary.total_urls == 1 { "" } else { "s" },
        summary.safe,
        summary.unsafe_urls,
        summary.invalid,
        summary.elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use crate::reachability::ReachabilityResult;

    #[test]
    fn test_summary_counts() {
        let mut summary = AuditSummary::default();
        summary.record(&AuditRecord::new(analyze("https://www.example.com"), None));
        summary.record(&AuditRecord::new(
            analyze("http://192.168.1.1/login-verify-urgent"),
            Some(ReachabilityResult::failed("refused")),
        ));
        summary.record(&AuditRecord::new(analyze("http://"), None));

        assert_eq!(summary.total_urls, 3);
        // "http://" is safe by the verdict rule: 0.30 <= 0.35 and floor(1 * 0.7) == 0
        assert_eq!(summary.safe, 2);
        assert_eq!(summary.unsafe_urls, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.reachable, 0);

        assert_eq!(summary.exit_code(FailOn::Never), 0);
        assert_eq!(summary.exit_code(FailOn::Unsafe), EXIT_CODE_UNSAFE);
    }

    #[test]
    fn test_exit_code_all_safe() {
        let mut summary = AuditSummary::default();
        summary.record(&AuditRecord::new(analyze("https://www.example.com"), None));
        assert_eq!(summary.exit_code(FailOn::Unsafe), 0);
    }
}
