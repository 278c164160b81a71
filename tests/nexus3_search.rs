use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use maven_version_resolver::search::diagnostics::CollectingDiagnostics;
use maven_version_resolver::search::response::ResultFormat;
use maven_version_resolver::{resolve_query, resolve_versions, ErrorKind, ResolverConfig, VersionQuery};

const SEARCH_PATH: &str = "/service/rest/v1/search/assets";

fn query(server: &MockServer) -> VersionQuery {
    VersionQuery {
        url: server.uri(),
        group_id: "org.example".to_string(),
        artifact_id: "demo".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("group", "org.example"))
        .and(query_param("name", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "downloadUrl": "a/demo-1.0.jar" },
                { "downloadUrl": "a/demo-2.0.jar" },
            ],
            "continuationToken": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let actual = resolve_versions(&server.uri(), "org.example", "demo", "", "").await;
    assert_eq!(actual, vec!["a/demo-2.0.jar", "a/demo-1.0.jar"]);
}

#[tokio::test]
async fn test_follows_continuation_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "downloadUrl": "a/demo-1.0.jar" }],
            "continuationToken": "page-2",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("continuationToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "continuationToken": "page-3",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("continuationToken", "page-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "downloadUrl": "a/demo-1.0.jar" }, { "downloadUrl": "a/demo-1.1.jar" }],
            "continuationToken": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let actual = resolve_versions(&server.uri(), "org.example", "demo", "", "").await;
    assert_eq!(actual, vec!["a/demo-1.1.jar", "a/demo-1.0.jar"]);
}

#[tokio::test]
async fn test_filters_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("repository", "releases"))
        .and(query_param("maven.extension", "war"))
        .and(query_param("maven.classifier", "sources"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "test-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "downloadUrl": "a/demo-1.0-sources.war", "maven2": { "classifier": "sources", "version": "1.0" } },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = query(&server);
    query.repository_id = Some("releases".to_string());
    query.packaging = Some("war".to_string());
    query.classifier = Some("sources,!tests".to_string());
    query.format = ResultFormat::Version;
    let config = ResolverConfig {
        user_agent: "test-agent".to_string(),
        ..Default::default()
    };

    let actual = resolve_query(&query, &config, Arc::new(CollectingDiagnostics::new())).await;
    assert_eq!(actual, vec!["1.0"]);
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let actual = resolve_query(&query(&server), &ResolverConfig::default(), diagnostics.clone()).await;

    assert!(actual.is_empty());
    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, ErrorKind::Transport);
}

#[tokio::test]
async fn test_failing_later_page_discards_earlier_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "downloadUrl": "a/demo-1.0.jar" }],
            "continuationToken": "page-2",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("continuationToken", "page-2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let actual = resolve_versions(&server.uri(), "org.example", "demo", "", "").await;
    assert!(actual.is_empty());
}

#[tokio::test]
async fn test_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login required</html>"))
        .mount(&server)
        .await;

    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let actual = resolve_query(&query(&server), &ResolverConfig::default(), diagnostics.clone()).await;

    assert!(actual.is_empty());
    assert_eq!(diagnostics.diagnostics()[0].kind, ErrorKind::Parse);
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200)
            .set_body_json(json!({ "items": [] }))
            .set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = ResolverConfig {
        request_timeout: Duration::from_millis(200),
        ..Default::default()
    };
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let actual = resolve_query(&query(&server), &config, diagnostics.clone()).await;

    assert!(actual.is_empty());
    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics[0].kind, ErrorKind::Transport);
    assert!(diagnostics[0].message.contains("timed out"));
}

#[tokio::test]
async fn test_endless_pagination_is_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "downloadUrl": "a/demo-1.0.jar" }],
            "continuationToken": "again",
        })))
        .expect(4)
        .mount(&server)
        .await;

    let config = ResolverConfig {
        max_pages: Some(4),
        ..Default::default()
    };
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let actual = resolve_query(&query(&server), &config, diagnostics.clone()).await;

    assert!(actual.is_empty());
    assert_eq!(diagnostics.diagnostics()[0].kind, ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_unreachable_server() {
    // nothing listens on port 1
    let actual = resolve_versions("http://127.0.0.1:1", "org.example", "demo", "jar", "").await;
    assert!(actual.is_empty());
}
