//! HTTP client wrapper shared by the crawler and probes
//!
//! One client is built per scan from the scan configuration; nothing is
//! shared across concurrent scans of different targets.

use crate::error::Result;
use crate::models::ScanConfig;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Thin wrapper over a per-scan reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HttpClient from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Sends a GET request with the default per-request timeout
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_timeout(url, self.timeout).await
    }

    /// Sends a GET request with an explicit per-request timeout
    pub async fn get_with_timeout(&self, url: &str, timeout: Duration) -> Result<Response> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }
}
