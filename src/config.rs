//! Configuration management for the Periscope scanner

use crate::error::{Result, ScanError};
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching default.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    max_pages: Option<usize>,
    timeout_secs: Option<u64>,
    sensitive_timeout_secs: Option<u64>,
    user_agent: Option<String>,
    follow_redirects: Option<bool>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(max_pages) = scan.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(timeout) = scan.sensitive_timeout_secs {
            config.sensitive_timeout_secs = timeout;
        }
        if let Some(ua) = scan.user_agent {
            config.user_agent = ua;
        }
        if let Some(follow) = scan.follow_redirects {
            config.follow_redirects = follow;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Rejects configurations that would make every scan a no-op
fn validate(config: &ScanConfig) -> Result<()> {
    if config.max_pages == 0 {
        return Err(ScanError::ConfigError(
            "max_pages must be at least 1".to_string(),
        ));
    }
    if config.timeout_secs == 0 || config.sensitive_timeout_secs == 0 {
        return Err(ScanError::ConfigError(
            "timeouts must be at least 1 second".to_string(),
        ));
    }
    Ok(())
}

/// Merges CLI arguments into an existing ScanConfig
pub fn merge_cli_args(
    config: &mut ScanConfig,
    target: String,
    max_pages: Option<usize>,
    timeout: Option<u64>,
) {
    config.target = target;

    if let Some(m) = max_pages {
        config.max_pages = m;
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
}
