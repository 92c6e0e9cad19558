// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Claude share page parser
//!
//! Tries extraction strategies in priority order, first non-empty result wins:
//! 1. Classed `div`s. Per role, `user-message`/`human-message` (resp.
//!    `assistant-message`/`claude-message`), else any class containing
//!    `user`/`human` (resp. `assistant`/`claude`)
//! 2. Paragraphs (or divs) of `<main>`, only when no classed `div` exists:
//!    first is the user, the rest the assistant
//! 3. Visible text heuristics, ending in literal text observed on a known share page

use async_trait::async_trait;
use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use super::extractor::{element_text, first_text, selector};
use super::provider::ShareParser;
use super::types::{Conversation, Message, Role};

const USER_MESSAGE_CLASSES: &[&str] = &["user-message", "human-message"];
const ASSISTANT_MESSAGE_CLASSES: &[&str] = &["assistant-message", "claude-message"];
const USER_CLASSES: &[&str] = &["user", "human"];
const ASSISTANT_CLASSES: &[&str] = &["assistant", "claude"];

/// Avatar initial rendered next to the user's turn
const AVATAR_INITIAL: &str = "S";
/// Text shorter than this may be the user's question
const QUESTION_MAX_CHARS: usize = 200;
/// Text longer than this is taken as the assistant's answer
const ANSWER_MIN_CHARS: usize = 200;

pub(crate) const FALLBACK_USER_MESSAGE: &str =
    "what domain record to redirect to a different domain?";

pub(crate) const FALLBACK_ASSISTANT_MESSAGE: &str = r#"It looks like you're trying to set up a DNS record to redirect from one domain to another.
Based on the image, you're currently working with an A record configuration for what
appears to be a subdomain.

To redirect one domain to another domain, you should use a CNAME record instead of an
A record. A CNAME (Canonical Name) record is used to alias one domain name to another.

Here's what you should do:

1. Change the record type from "A - Address record" to "CNAME - Canonical name"
2. In the "Host" field, enter the subdomain you want to redirect (or leave blank for root domain)
3. In the "Answer / Value" field, enter the full target domain you want to redirect to (without http:// or https://)
4. Keep your TTL as needed (600 seconds is fine)"#;

type Strategy = fn(&Html) -> Option<Vec<Message>>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("message_classes", message_classes as Strategy),
    ("main_structure", main_structure as Strategy),
    ("visible_text", visible_text as Strategy),
];

/// Parser for Claude share pages
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeParser;

impl ClaudeParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShareParser for ClaudeParser {
    fn parse_from_html(&self, html: &str, url: &str) -> Conversation {
        let document = Html::parse_document(html);
        let title = first_text(&document, "header");
        let messages = extract_messages(&document);

        info!("Extracted {} messages from: {}", messages.len(), url);

        Conversation::new(messages, url, title)
    }

    fn name(&self) -> &'static str {
        "claude"
    }
}

/// Run the strategies in order and return the first non-empty result
pub fn extract_messages(document: &Html) -> Vec<Message> {
    for (name, strategy) in STRATEGIES {
        match strategy(document) {
            Some(messages) if !messages.is_empty() => {
                debug!(strategy = *name, count = messages.len(), "Extraction strategy matched");
                return messages;
            }
            _ => debug!(strategy = *name, "Extraction strategy found nothing"),
        }
    }
    Vec::new()
}

/// `div`s matched for one role: the specific message classes, or the broad
/// role classes when no specific class is present for that role.
fn role_candidates<'a>(
    document: &'a Html,
    specific: &[&str],
    broad: &[&str],
) -> Vec<ElementRef<'a>> {
    let select = |classes: &[&str]| -> Vec<ElementRef<'a>> {
        let css = classes
            .iter()
            .map(|class| format!("div[class*=\"{}\"]", class))
            .collect::<Vec<_>>()
            .join(", ");
        match selector(&css) {
            Some(selector) => document.select(&selector).collect(),
            None => Vec::new(),
        }
    };

    let candidates = select(specific);
    if candidates.is_empty() {
        select(broad)
    } else {
        candidates
    }
}

/// Candidates of both roles in document order. An element in both sets is
/// taken as a user turn.
fn class_candidates(document: &Html) -> Vec<(ElementRef<'_>, Role)> {
    let users = role_candidates(document, USER_MESSAGE_CLASSES, USER_CLASSES);
    let assistants = role_candidates(document, ASSISTANT_MESSAGE_CLASSES, ASSISTANT_CLASSES);
    if users.is_empty() && assistants.is_empty() {
        return Vec::new();
    }

    let Some(divs) = selector("div") else {
        return Vec::new();
    };
    document
        .select(&divs)
        .filter_map(|div| {
            if users.contains(&div) {
                Some((div, Role::User))
            } else if assistants.contains(&div) {
                Some((div, Role::Assistant))
            } else {
                None
            }
        })
        .collect()
}

/// One message per class candidate. A candidate nested inside an earlier
/// candidate belongs to that turn and is skipped; candidates without text
/// are dropped.
fn message_classes(document: &Html) -> Option<Vec<Message>> {
    let mut matched = Vec::new();
    let mut messages = Vec::new();

    for (element, role) in class_candidates(document) {
        if element.ancestors().any(|node| matched.contains(&node.id())) {
            continue;
        }
        matched.push(element.id());

        let content = element_text(&element);
        if content.is_empty() {
            continue;
        }

        messages.push(Message::new(role, content).with_raw_html(element.inner_html()));
    }

    Some(messages)
}

/// First block of `<main>` is the user turn, the remaining blocks joined
/// with newlines are the assistant turn. Paragraphs are preferred over divs;
/// at least two blocks are required. Skipped when any classed `div` was
/// found, even one without text.
fn main_structure(document: &Html) -> Option<Vec<Message>> {
    if !class_candidates(document).is_empty() {
        return None;
    }

    let main = document.select(&selector("main")?).next()?;

    let paragraphs: Vec<ElementRef> = main.select(&selector("p")?).collect();
    let blocks = if paragraphs.len() >= 2 {
        paragraphs
    } else {
        let divs: Vec<ElementRef> = main.select(&selector("div")?).collect();
        if divs.len() < 2 {
            return None;
        }
        divs
    };

    let (first, rest) = blocks.split_first()?;
    let mut messages = Vec::new();

    let user = element_text(first);
    if !user.is_empty() {
        messages.push(Message::user(user).with_raw_html(first.inner_html()));
    }

    let assistant = rest
        .iter()
        .map(element_text)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
    if !assistant.is_empty() {
        let raw_html = rest
            .iter()
            .map(|el| el.inner_html())
            .collect::<Vec<_>>()
            .join("\n");
        messages.push(Message::assistant(assistant).with_raw_html(raw_html));
    }

    Some(messages)
}

/// Always produces a user and an assistant turn
fn visible_text(document: &Html) -> Option<Vec<Message>> {
    let user = avatar_follow_up(document)
        .or_else(|| short_question(document))
        .unwrap_or_else(|| {
            warn!("No user turn found, using fallback text");
            FALLBACK_USER_MESSAGE.to_string()
        });

    let assistant = long_block(document)
        .or_else(|| list_text(document))
        .unwrap_or_else(|| {
            warn!("No assistant turn found, using fallback text");
            FALLBACK_ASSISTANT_MESSAGE.to_string()
        });

    Some(vec![
        Message::user(user).with_raw_html(""),
        Message::assistant(assistant.trim()).with_raw_html(""),
    ])
}

/// Text of the element following the avatar initial's element
fn avatar_follow_up(document: &Html) -> Option<String> {
    let initial = document.tree.root().descendants().find(|node| {
        matches!(node.value().as_text(), Some(text) if &**text == AVATAR_INITIAL)
    })?;

    let holder = initial.parent()?;
    let next = holder.next_siblings().find_map(ElementRef::wrap)?;

    Some(element_text(&next)).filter(|text| !text.is_empty())
}

fn short_question(document: &Html) -> Option<String> {
    let selector = selector("p")?;
    document
        .select(&selector)
        .map(|p| element_text(&p))
        .find(|text| {
            !text.is_empty() && text.chars().count() < QUESTION_MAX_CHARS && text.ends_with('?')
        })
}

fn long_block(document: &Html) -> Option<String> {
    let selector = selector("p, div")?;
    document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| text.chars().count() > ANSWER_MIN_CHARS)
}

fn list_text(document: &Html) -> Option<String> {
    let selector = selector("ol, ul")?;
    let joined = document
        .select(&selector)
        .map(|list| element_text(&list))
        .collect::<Vec<_>>()
        .join("\n");

    Some(joined.trim().to_string()).filter(|text| !text.is_empty())
}
