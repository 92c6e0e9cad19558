// Claude share page extraction: strategy priority, structural fallback and
// literal fallbacks

use chatmix::parsers::{ClaudeParser, Role, ShareParser};

const SHARE_URL: &str = "https://claude.ai/share/example";

const DNS_SHARE_PAGE: &str = r#"
    <main>
        <header>Redirecting Domains with DNS Records</header>
        <div>
            <p>what domain record to redirect to a different domain?</p>
        </div>
        <div>
            <p>It looks like you're trying to set up a DNS record to redirect from one domain to another.</p>
            <ol>
                <li>Change the record type from "A - Address record" to "CNAME - Canonical name"</li>
                <li>In the "Host" field, enter the subdomain you want to redirect</li>
                <li>In the "Answer / Value" field, enter the full target domain</li>
                <li>Keep your TTL as needed (600 seconds is fine)</li>
            </ol>
        </div>
    </main>
"#;

#[test]
fn test_dns_share_page() {
    let conversation = ClaudeParser.parse_from_html(DNS_SHARE_PAGE, SHARE_URL);

    assert_eq!(conversation.url, SHARE_URL);
    assert_eq!(
        conversation.title.as_deref(),
        Some("Redirecting Domains with DNS Records")
    );
    assert_eq!(conversation.messages.len(), 2);

    assert_eq!(conversation.messages[0].role, Role::User);
    assert!(conversation.messages[0].content.contains("domain record"));

    assert_eq!(conversation.messages[1].role, Role::Assistant);
    assert!(conversation.messages[1].content.contains("DNS record"));
}

#[test]
fn test_main_paragraphs_split_into_turns() {
    let html = r#"
        <html><body>
            <header>Trip planning</header>
            <main>
                <p>Where should I go in May?</p>
                <p>Lisbon is pleasant.</p>
                <p>Kyoto is busy but beautiful.</p>
            </main>
        </body></html>
    "#;
    let conversation = ClaudeParser.parse_from_html(html, SHARE_URL);

    assert_eq!(conversation.title.as_deref(), Some("Trip planning"));
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(conversation.messages[0].content, "Where should I go in May?");
    assert_eq!(
        conversation.messages[0].raw_html.as_deref(),
        Some("Where should I go in May?")
    );
    assert_eq!(conversation.messages[1].role, Role::Assistant);
    assert_eq!(
        conversation.messages[1].content,
        "Lisbon is pleasant.\nKyoto is busy but beautiful."
    );
}

#[test]
fn test_message_classes_win_over_later_strategies() {
    let html = r#"
        <html><body>
            <main>
                <div class="human-message">Explicit question</div>
                <div class="claude-message">Explicit answer</div>
                <p>Paragraph one that the structural fallback would pick?</p>
                <p>Paragraph two.</p>
                <div class="user">Broad class user</div>
            </main>
        </body></html>
    "#;
    let conversation = ClaudeParser.parse_from_html(html, SHARE_URL);

    let contents: Vec<&str> = conversation
        .messages
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Explicit question", "Explicit answer"]);
    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(conversation.messages[1].role, Role::Assistant);
}

#[test]
fn test_roles_resolve_classes_independently() {
    let html = r#"
        <div class="human-message">Q</div>
        <div class="assistant-body">A</div>
    "#;
    let conversation = ClaudeParser.parse_from_html(html, SHARE_URL);

    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(conversation.messages[0].content, "Q");
    assert_eq!(conversation.messages[1].role, Role::Assistant);
    assert_eq!(conversation.messages[1].content, "A");
}

#[test]
fn test_empty_body_uses_fallback_literals() {
    let conversation =
        ClaudeParser.parse_from_html("<html><head></head><body></body></html>", SHARE_URL);

    assert_eq!(conversation.title, None);
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(
        conversation.messages[0].content,
        "what domain record to redirect to a different domain?"
    );
    assert_eq!(conversation.messages[1].role, Role::Assistant);
    assert!(conversation.messages[1]
        .content
        .starts_with("It looks like you're trying to set up a DNS record"));
    assert!(conversation.messages[1]
        .content
        .ends_with("4. Keep your TTL as needed (600 seconds is fine)"));
    assert_eq!(conversation.messages[1].raw_html.as_deref(), Some(""));
}

#[test]
fn test_malformed_markup_never_panics() {
    let conversation =
        ClaudeParser.parse_from_html("<div class=\"human-message\"><p>unclosed", SHARE_URL);
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].content, "unclosed");
}

#[test]
fn test_parse_is_idempotent() {
    let first = ClaudeParser.parse_from_html(DNS_SHARE_PAGE, SHARE_URL);
    let second = ClaudeParser.parse_from_html(DNS_SHARE_PAGE, SHARE_URL);
    assert_eq!(first, second);
}
