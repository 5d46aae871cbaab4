//! Human-readable report rendering.

use std::io::{self, Write};

use colored::*;

use crate::models::RiskTier;

use super::types::AuditRecord;

/// Display palette for risk tiers.
fn tier_rgb(tier: RiskTier) -> (u8, u8, u8) {
    match tier {
        RiskTier::Low => (0x4C, 0xAF, 0x50),
        RiskTier::Medium => (0xFF, 0x98, 0x00),
        RiskTier::High => (0xF4, 0x43, 0x36),
        RiskTier::Critical => (0xD3, 0x2F, 0x2F),
    }
}

fn tier_colored(tier: RiskTier) -> ColoredString {
    let (r, g, b) = tier_rgb(tier);
    tier.label().truecolor(r, g, b)
}

/// Writes one record as an indented, colored text block.
pub fn write_plain<W: Write>(
    writer: &mut W,
    record: &AuditRecord,
    always_recommend: bool,
) -> io::Result<()> {
    let result = &record.result;
    let report = &result.audit_report;

    writeln!(writer, "{}", result.url.bold())?;
    let verdict = if result.is_safe {
        "SAFE".green().bold()
    } else {
        "UNSAFE".red().bold()
    };
    writeln!(
        writer,
        "  Verdict: {}  risk {:.2} ({})  {}/{} checks passed ({}%)",
        verdict,
        result.risk_score,
        result.risk_label(),
        report.passed_checks,
        report.total_checks,
        report.score_percentage()
    )?;
    writeln!(writer, "  {}", result.risk_description().dimmed())?;

    for finding in &report.findings {
        let status = if finding.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        writeln!(
            writer,
            "  [{}] {:<22} {:<40} {}",
            status,
            finding.title,
            finding.observed_value,
            tier_colored(finding.risk_tier)
        )?;
    }

    let recommendations = record.visible_recommendations(always_recommend);
    if !recommendations.is_empty() {
        writeln!(writer, "  Recommendations:")?;
        for rec in recommendations {
            writeln!(writer, "    - {rec}")?;
        }
    }

    if let Some(probe) = &record.reachability {
        writeln!(
            writer,
            "  Reachability: {} ({})",
            if probe.is_reachable {
                "reachable".green()
            } else {
                "unreachable".yellow()
            },
            probe.status_description()
        )?;
        if let Some(location) = &probe.redirect_location {
            writeln!(writer, "    Redirects to: {location}")?;
        }
        if let Some(server) = &probe.server_info {
            writeln!(writer, "    Server: {server}")?;
        }
    }

    writeln!(writer)
}
