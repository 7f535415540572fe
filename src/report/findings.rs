//! Findings synthesizer
//!
//! Deterministic rule engine that turns raw probe output into the
//! client-facing report. Rule order defines report order; the rules are
//! independent, and the no-issues sentinel fires only when nothing else
//! did, so the report is never empty.

use crate::models::{CorsCheck, Finding, HeaderCheck, Severity};

/// Converts probe evidence into an ordered list of client findings
pub fn synthesize(
    headers: &HeaderCheck,
    cors: &CorsCheck,
    sensitive: &[String],
) -> Vec<Finding> {
    let mut report = Vec::new();

    if !headers.missing.is_empty() {
        report.push(Finding::new(
            "Missing Security Headers",
            Severity::Medium,
            "Your website is missing browser-level security protections. \
             This increases attack risk.",
            "Add the recommended security headers in the server configuration.",
        ));
    }

    if cors.wildcard {
        report.push(Finding::new(
            "CORS Misconfiguration",
            Severity::High,
            "Your website allows any external website to request its data. \
             This may expose user data.",
            "Restrict CORS to trusted domains only.",
        ));
    }

    if !sensitive.is_empty() {
        report.push(Finding::new(
            "Sensitive Files Exposed",
            Severity::High,
            "Internal or configuration files are accessible from the internet. \
             This can leak secrets.",
            "Block access to these files and remove old backups.",
        ));
    }

    if report.is_empty() {
        report.push(Finding::new(
            "No Major Issues Found",
            Severity::Low,
            "No critical issues were detected in passive security checks.",
            "Continue monitoring and keep software up to date.",
        ));
    }

    report
}
