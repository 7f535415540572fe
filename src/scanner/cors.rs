//! CORS wildcard exposure probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::CorsCheck;
use tracing::debug;

/// Probes the target's Access-Control-Allow-Origin response header.
///
/// No `Origin` request header is sent, so only a static wildcard policy
/// is detectable; reflected-origin policies are out of reach of this
/// check by design. Only the literal `*` is flagged.
///
/// Like the header probe, a network failure here is fatal for the scan.
pub async fn scan(client: &HttpClient, url: &str) -> Result<CorsCheck> {
    let response = client
        .get(url)
        .await
        .map_err(|e| super::probe_failure("CORS", url, e))?;

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("Not present")
        .to_string();

    let wildcard = allow_origin == "*";
    debug!("CORS probe: allow-origin '{allow_origin}', wildcard: {wildcard}");

    Ok(CorsCheck {
        allow_origin,
        wildcard,
    })
}
