//! Common test utilities

use periscope::models::ScanConfig;

/// Creates a test ScanConfig pointing to a wiremock server
pub fn test_config(target: &str) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        max_pages: 10,
        timeout_secs: 5,
        sensitive_timeout_secs: 2,
        user_agent: "Periscope-Test/0.1.0".to_string(),
        follow_redirects: true,
    }
}
