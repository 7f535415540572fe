//! Core data models for the Periscope scanner

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for security findings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

/// A client-facing finding synthesized from probe evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Short title identifying the issue class
    pub title: String,
    /// Severity level
    pub severity: Severity,
    /// Plain-language explanation for a non-technical reader
    pub explanation: String,
    /// Recommended remediation
    pub remediation: String,
}

impl Finding {
    pub fn new(
        title: impl Into<String>,
        severity: Severity,
        explanation: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            severity,
            explanation: explanation.into(),
            remediation: remediation.into(),
        }
    }
}

/// A named input field belonging to a discovered form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    /// Value of the `type` attribute, defaulting to "text"
    #[serde(rename = "type")]
    pub field_type: String,
}

/// An HTML form discovered during the crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Page the form was found on
    pub page: String,
    /// Absolute submission target (defaults to the page URL)
    pub action: String,
    /// Lowercased HTTP method, defaulting to "get"
    pub method: String,
    /// Named inputs only; unnamed fields cannot be referenced in a submission
    pub inputs: Vec<FormInput>,
}

/// Attack-surface map produced by one crawl invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Visited pages in discovery order
    pub pages: Vec<String>,
    /// Deduplicated absolute script sources, in discovery order
    pub scripts: Vec<String>,
    /// Discovered forms in discovery order
    pub forms: Vec<Form>,
}

/// Result of the security-header probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCheck {
    pub status_code: u16,
    /// Server banner, or "Not Disclosed" when the header is absent
    #[serde(rename = "server_banner")]
    pub server: String,
    /// Security headers absent from the response, in canonical order
    #[serde(rename = "missing_headers")]
    pub missing: Vec<String>,
}

/// Result of the CORS probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsCheck {
    /// Access-Control-Allow-Origin value, or "Not present"
    #[serde(rename = "allow_origin_value")]
    pub allow_origin: String,
    /// True iff the value is the literal `*`
    #[serde(rename = "is_wildcard")]
    pub wildcard: bool,
}

/// Complete output of one scan, as handed to the persistence boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Normalized target URL
    pub target: String,
    /// Unique scan identifier
    pub scan_id: String,
    /// Scan start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Scan end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// Discovered attack surface
    pub surface: CrawlResult,
    /// Security-header probe output
    pub headers: HeaderCheck,
    /// CORS probe output
    pub cors: CorsCheck,
    /// Sensitive paths that answered with an accessible status
    pub sensitive: Vec<String>,
    /// Synthesized client report; never empty
    pub report: Vec<Finding>,
}

impl ScanResult {
    /// Returns count of report findings by severity
    pub fn count_by_severity(&self, severity: &Severity) -> usize {
        self.report
            .iter()
            .filter(|f| &f.severity == severity)
            .count()
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target URL to scan
    pub target: String,
    /// Hard cap on distinct pages the crawler may attempt
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    /// Per-request timeout for crawl and header/CORS probes, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Per-request timeout for sensitive-path probes, in seconds
    #[serde(default = "default_sensitive_timeout")]
    pub sensitive_timeout_secs: u64,
    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whether to follow HTTP redirects
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_max_pages() -> usize {
    25
}

fn default_timeout() -> u64 {
    8
}

fn default_sensitive_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    "Periscope-Scanner/0.1.0".to_string()
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout(),
            sensitive_timeout_secs: default_sensitive_timeout(),
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_severity() {
        let result = ScanResult {
            target: "http://example.com".to_string(),
            scan_id: "test".to_string(),
            started_at: Local::now(),
            finished_at: None,
            surface: CrawlResult::default(),
            headers: HeaderCheck {
                status_code: 200,
                server: "Not Disclosed".to_string(),
                missing: vec!["X-Frame-Options".to_string()],
            },
            cors: CorsCheck {
                allow_origin: "*".to_string(),
                wildcard: true,
            },
            sensitive: Vec::new(),
            report: vec![
                Finding::new("Missing Security Headers", Severity::Medium, "", ""),
                Finding::new("CORS Misconfiguration", Severity::High, "", ""),
            ],
        };

        assert_eq!(result.count_by_severity(&Severity::High), 1);
        assert_eq!(result.count_by_severity(&Severity::Medium), 1);
        assert_eq!(result.count_by_severity(&Severity::Low), 0);
    }

    #[test]
    fn test_probe_results_serialized_field_names() {
        let headers = HeaderCheck {
            status_code: 200,
            server: "nginx".to_string(),
            missing: vec!["Content-Security-Policy".to_string()],
        };
        let value = serde_json::to_value(&headers).expect("serialize");
        assert_eq!(value["server_banner"], "nginx");
        assert!(value["missing_headers"].is_array());

        let cors = CorsCheck {
            allow_origin: "*".to_string(),
            wildcard: true,
        };
        let value = serde_json::to_value(&cors).expect("serialize");
        assert_eq!(value["allow_origin_value"], "*");
        assert_eq!(value["is_wildcard"], true);
    }
}
