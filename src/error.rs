//! Error types for Periscope scans

use thiserror::Error;

/// Main error type for Periscope operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A load-bearing probe failed. Unlike crawl or sensitive-path fetch
    /// failures this aborts the scan, so the caller must see which probe
    /// died against which target.
    #[error("{probe} probe failed against {url}: {source}")]
    Probe {
        probe: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result type alias for Periscope operations
pub type Result<T> = std::result::Result<T, ScanError>;
