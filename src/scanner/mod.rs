//! Scan orchestration
//!
//! Runs the crawler and the three probes against a target and assembles
//! the complete scan result. The probes are mutually independent and
//! read-only, so they run concurrently with the crawl. The crawl and the
//! sensitive-path probe tolerate individual fetch failures; the header
//! and CORS probes are load-bearing and abort the scan when they fail.

pub mod cors;
pub mod headers;
pub mod sensitive;

use crate::crawler::{scope, CancelHandle, Crawler};
use crate::error::{Result, ScanError};
use crate::http::HttpClient;
use crate::models::{ScanConfig, ScanResult};
use crate::report::findings;
use chrono::Local;
use std::time::Duration;
use tracing::info;

/// Wraps a transport error from a load-bearing probe so the failure
/// names the probe and target instead of surfacing as a bare HTTP error.
pub(crate) fn probe_failure(probe: &'static str, url: &str, err: ScanError) -> ScanError {
    match err {
        ScanError::HttpError(source) => ScanError::Probe {
            probe,
            url: url.to_string(),
            source,
        },
        other => other,
    }
}

/// Runs a complete scan against the configured target
pub async fn run_scan(config: &ScanConfig) -> Result<ScanResult> {
    run_scan_with_cancel(config, CancelHandle::new()).await
}

/// Runs a complete scan, honoring an external cancellation handle for
/// the crawl phase
pub async fn run_scan_with_cancel(
    config: &ScanConfig,
    cancel: CancelHandle,
) -> Result<ScanResult> {
    let target = scope::normalize_target(&config.target);
    let client = HttpClient::from_config(config)?;
    let scan_id = uuid::Uuid::new_v4().to_string();
    let started_at = Local::now();

    info!("Starting scan {scan_id} against {target}");

    let crawler = Crawler::new(&client, config).with_cancel(cancel);
    let sensitive_timeout = Duration::from_secs(config.sensitive_timeout_secs);

    let (surface, headers, cors_check, sensitive) = tokio::join!(
        crawler.crawl(&target),
        headers::scan(&client, &target),
        cors::scan(&client, &target),
        sensitive::scan(&client, &target, sensitive_timeout),
    );

    let headers = headers?;
    let cors_check = cors_check?;

    let report = findings::synthesize(&headers, &cors_check, &sensitive);

    info!(
        "Scan {scan_id} complete: {} pages, {} findings",
        surface.pages.len(),
        report.len()
    );

    Ok(ScanResult {
        target,
        scan_id,
        started_at,
        finished_at: Some(Local::now()),
        surface,
        headers,
        cors: cors_check,
        sensitive,
        report,
    })
}
