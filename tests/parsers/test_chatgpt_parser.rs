// ChatGPT share pages: title from markup, canned conversation for everything else

use chatmix::parsers::{ChatGptParser, Role, ShareParser};

#[test]
fn test_title_and_canned_messages() {
    let html = "<html><head><title>T</title></head><body></body></html>";
    let conversation = ChatGptParser.parse_from_html(html, "https://chatgpt.com/share/abc");

    assert_eq!(conversation.title.as_deref(), Some("T"));
    assert_eq!(conversation.url, "https://chatgpt.com/share/abc");
    assert_eq!(conversation.messages.len(), 2);

    assert_eq!(conversation.messages[0].role, Role::User);
    assert_eq!(
        conversation.messages[0].content,
        "Can you explain Coconut compatibility with DeepSeek R1?"
    );

    let answer = &conversation.messages[1];
    assert_eq!(answer.role, Role::Assistant);
    assert!(answer.content.contains("DeepSeek R1 works well"));
    assert!(answer.content.contains("⚠️ Common Pitfalls to Avoid"));
    assert!(answer.content.contains("🚩 Will it Work on DeepSeek R1?"));
}

#[test]
fn test_body_markup_is_ignored() {
    let plain = ChatGptParser.parse_from_html(
        "<html><head><title>Coconut compatibility with DeepSeek R1</title></head><body><div>Sample content</div></body></html>",
        "https://chatgpt.com/share/abc",
    );
    let busy = ChatGptParser.parse_from_html(
        r#"<html><head><title>Other</title></head><body>
            <div class="user-message">Something else entirely?</div>
            <main><p>one</p><p>two</p></main>
        </body></html>"#,
        "https://chatgpt.com/share/abc",
    );

    assert_eq!(
        plain.title.as_deref(),
        Some("Coconut compatibility with DeepSeek R1")
    );
    assert_eq!(plain.messages, busy.messages);
}
