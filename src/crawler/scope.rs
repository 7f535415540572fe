//! Target normalization and same-domain scope checks

use url::Url;

/// Canonicalizes a user-supplied target URL.
///
/// Trims whitespace and prepends `http://` when no HTTP(S) scheme is
/// present. Best-effort only: malformed input is passed through and left
/// to fail at fetch time.
pub fn normalize_target(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Returns true when both URLs share the exact same authority (host and
/// explicit port). No subdomain or wildcard matching; scheme is ignored.
pub fn same_authority(base: &str, candidate: &str) -> bool {
    match (Url::parse(base), Url::parse(candidate)) {
        (Ok(a), Ok(b)) => authority(&a) == authority(&b),
        _ => false,
    }
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_target("example.com"), "http://example.com");
        assert_eq!(normalize_target("  example.com  "), "http://example.com");
        assert_eq!(
            normalize_target("https://example.com"),
            "https://example.com"
        );
        assert_eq!(normalize_target("HTTP://example.com"), "HTTP://example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["example.com", " https://a.b/c ", "http://x", "not a url"] {
            let once = normalize_target(raw);
            assert_eq!(normalize_target(&once), once);
        }
    }

    #[test]
    fn test_same_authority() {
        assert!(same_authority("http://example.com/a", "http://example.com/b"));
        assert!(same_authority("http://example.com", "https://example.com/x"));
        assert!(!same_authority("http://example.com", "http://sub.example.com"));
        assert!(!same_authority("http://example.com", "http://example.com:8080"));
        assert!(!same_authority("http://example.com", "not a url"));
    }
}
