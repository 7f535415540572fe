//! End-to-end scan orchestration tests

mod common;

use common::test_config;
use periscope::error::ScanError;
use periscope::models::Severity;
use periscope::report;
use periscope::scanner::run_scan;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_scan_with_multiple_issues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .insert_header("Access-Control-Allow-Origin", "*")
                .set_body_string(
                    r#"
                    <script src="/js/app.js"></script>
                    <a href="/contact">Contact</a>
                    <form action="/send" method="post"><input name="msg"></form>
                    "#,
                ),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("<p>contact us</p>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/.env"))
        .respond_with(ResponseTemplate::new(200).set_body_string("DB_PASSWORD=x"))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let result = run_scan(&config).await.expect("scan");

    assert_eq!(result.target, server.uri());
    assert!(result.finished_at.is_some());

    assert!(result.surface.pages.contains(&server.uri()));
    assert!(result
        .surface
        .pages
        .contains(&format!("{}/contact", server.uri())));
    assert_eq!(
        result.surface.scripts,
        vec![format!("{}/js/app.js", server.uri())]
    );
    assert_eq!(result.surface.forms.len(), 1);

    assert!(result.cors.wildcard);
    assert!(!result.headers.missing.is_empty());
    assert_eq!(result.sensitive, vec![format!("{}/.env", server.uri())]);

    let titles: Vec<&str> = result.report.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Missing Security Headers",
            "CORS Misconfiguration",
            "Sensitive Files Exposed",
        ]
    );
    assert_eq!(result.count_by_severity(&Severity::High), 2);
    assert_eq!(result.count_by_severity(&Severity::Medium), 1);
    assert_eq!(result.count_by_severity(&Severity::Low), 0);
}

#[tokio::test]
async fn test_full_scan_clean_target_gets_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("content-security-policy", "default-src 'self'")
                .insert_header("strict-transport-security", "max-age=31536000")
                .insert_header("x-frame-options", "DENY")
                .insert_header("x-content-type-options", "nosniff")
                .insert_header("referrer-policy", "no-referrer")
                .insert_header("permissions-policy", "camera=()"),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let result = run_scan(&config).await.expect("scan");

    assert!(result.sensitive.is_empty());
    assert_eq!(result.report.len(), 1);
    assert_eq!(result.report[0].title, "No Major Issues Found");
}

#[tokio::test]
async fn test_scan_normalizes_bare_target() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let bare = server.uri().trim_start_matches("http://").to_string();
    let config = test_config(&bare);
    let result = run_scan(&config).await.expect("scan");

    assert_eq!(result.target, server.uri());
}

#[tokio::test]
async fn test_scan_fails_when_load_bearing_probe_fails() {
    let config = test_config("http://127.0.0.1:1");
    let err = run_scan(&config).await.expect_err("scan must fail");

    match err {
        ScanError::Probe { url, .. } => assert_eq!(url, "http://127.0.0.1:1"),
        other => panic!("expected probe error, got: {other}"),
    }
}

#[tokio::test]
async fn test_scan_result_round_trips_through_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("Access-Control-Allow-Origin", "*"),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let result = run_scan(&config).await.expect("scan");

    let path = std::env::temp_dir().join(format!("periscope_{}.json", result.scan_id));
    report::json::export(&result, &path).expect("export");
    let loaded = report::json::load(&path).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.scan_id, result.scan_id);
    assert_eq!(loaded.target, result.target);
    assert_eq!(loaded.surface, result.surface);
    assert_eq!(loaded.report, result.report);
    assert_eq!(loaded.sensitive, result.sensitive);
}
