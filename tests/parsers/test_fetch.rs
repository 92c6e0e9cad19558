// Fetching share pages over HTTP against a local mock server

use std::time::Duration;

use chatmix::fetch::{FetchConfig, FetchError, PageFetcher};
use chatmix::parsers::{ClaudeParser, Role, ShareParser};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_USER_AGENT: &str = "chatmix-test/1.0";

fn test_fetcher() -> PageFetcher {
    PageFetcher::new(FetchConfig::default().with_user_agent(TEST_USER_AGENT)).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_user_agent_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/share/abc"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let html = test_fetcher()
        .fetch(&format!("{}/share/abc", server.uri()))
        .await
        .unwrap();
    assert_eq!(html, "<html>ok</html>");
}

#[tokio::test]
async fn test_parse_from_url_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/share/dns"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <header>Redirecting Domains</header>
                <div class="human-message">Which record do I need?</div>
                <div class="claude-message">Use a CNAME record.</div>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let url = format!("{}/share/dns", server.uri());
    let conversation = ClaudeParser
        .parse_from_url(&test_fetcher(), &url)
        .await
        .unwrap();

    assert_eq!(conversation.url, url);
    assert_eq!(conversation.title.as_deref(), Some("Redirecting Domains"));
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(conversation.messages[1].content, "Use a CNAME record.");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/share/missing", server.uri());
    let result = ClaudeParser.parse_from_url(&test_fetcher(), &url).await;

    match result {
        Err(FetchError::HttpStatus { status, url: failed }) => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(FetchConfig::default().with_timeout_secs(1)).unwrap();
    let result = fetcher.fetch(&format!("{}/share/slow", server.uri())).await;

    assert!(matches!(result, Err(FetchError::Timeout(_))));
}
