//! Sensitive well-known path probe

use crate::http::HttpClient;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Well-known paths that expose configuration, credentials or internal
/// tooling when reachable
pub const SENSITIVE_PATHS: &[&str] = &[
    "/.env",
    "/robots.txt",
    "/admin",
    "/backup.zip",
    "/phpinfo.php",
    "/.git/config",
];

/// Probes each sensitive path against the target and returns the URLs
/// that answered with an accessible status (200 or 206), in probed-path
/// order.
///
/// Individual network errors only drop that path from the result; the
/// remaining paths are still probed.
pub async fn scan(client: &HttpClient, base_url: &str, timeout: Duration) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        debug!("Sensitive-path probe skipped, unparseable base: {base_url}");
        return Vec::new();
    };

    let mut found = Vec::new();

    for path in SENSITIVE_PATHS {
        let Ok(probe_url) = base.join(path) else {
            continue;
        };

        match client.get_with_timeout(probe_url.as_str(), timeout).await {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 || status == 206 {
                    found.push(probe_url.to_string());
                } else {
                    debug!("Sensitive path {probe_url} answered {status}");
                }
            }
            Err(e) => {
                debug!("Sensitive path {probe_url} unreachable: {e}");
            }
        }
    }

    found
}
