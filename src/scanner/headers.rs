//! Security response header probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::HeaderCheck;
use tracing::debug;

/// Security headers every hardened site is expected to send
pub const SEC_HEADERS: &[&str] = &[
    "Content-Security-Policy",
    "Strict-Transport-Security",
    "X-Frame-Options",
    "X-Content-Type-Options",
    "Referrer-Policy",
    "Permissions-Policy",
];

/// Probes the target for missing security headers.
///
/// This probe is load-bearing: a network failure here aborts the scan
/// rather than being swallowed.
pub async fn scan(client: &HttpClient, url: &str) -> Result<HeaderCheck> {
    let response = client
        .get(url)
        .await
        .map_err(|e| super::probe_failure("header", url, e))?;

    let status_code = response.status().as_u16();
    let headers = response.headers();

    let server = headers
        .get("server")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Not Disclosed")
        .to_string();

    // HeaderMap lookups are case-insensitive, so the canonical spelling
    // matches however the server capitalizes the header.
    let missing: Vec<String> = SEC_HEADERS
        .iter()
        .filter(|name| !headers.contains_key(**name))
        .map(|name| name.to_string())
        .collect();

    debug!("Header probe: status {status_code}, {} missing", missing.len());

    Ok(HeaderCheck {
        status_code,
        server,
        missing,
    })
}
