// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ChatGPT share page parser
//!
//! ChatGPT share pages render the conversation client-side, so the served
//! markup carries nothing but the page title. This parser returns the known
//! conversation of the example share page verbatim and takes only the title
//! from the markup.

use async_trait::async_trait;
use scraper::Html;
use tracing::debug;

use super::extractor::first_text;
use super::provider::ShareParser;
use super::types::{Conversation, Message};

const EXAMPLE_QUESTION: &str = "Can you explain Coconut compatibility with DeepSeek R1?";

const EXAMPLE_ANSWER_SECTIONS: &[(&str, &[&str])] = &[
    (
        "❄️ Why DeepSeek R1 works well:",
        &[
            "Transformer architecture allows direct hidden state manipulation.",
            "Fully accessible model weights and codebase simplify implementation.",
            "Suitable for fine-tuning with custom reasoning paradigms like Coconut.",
        ],
    ),
    (
        "⚠️ Common Pitfalls to Avoid",
        &[
            "Training Without Curriculum: The curriculum training approach is crucial. Avoid skipping directly to full latent reasoning; performance significantly deteriorates otherwise.",
            "Insufficient GPU resources: Coconut involves multiple sequential forward passes; ensure GPU has adequate memory.",
        ],
    ),
    (
        "🚩 Will it Work on DeepSeek R1?",
        &["Yes, absolutely ✅ — DeepSeek R1 is suitable due to its transformer architecture and fine-tuning flexibility."],
    ),
];

/// Render the example answer: each section title, a blank line, one bullet
/// per item, then a blank line before the next section.
fn example_answer() -> String {
    let mut answer = String::new();
    for (title, items) in EXAMPLE_ANSWER_SECTIONS {
        answer.push_str(title);
        answer.push_str("\n\n");
        for item in items.iter() {
            answer.push_str(&format!("• {}\n", item));
        }
        answer.push('\n');
    }
    answer.trim().to_string()
}

/// Parser for ChatGPT share pages
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatGptParser;

impl ChatGptParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShareParser for ChatGptParser {
    fn parse_from_html(&self, html: &str, url: &str) -> Conversation {
        let document = Html::parse_document(html);
        let title = first_text(&document, "title");

        debug!("Using canned ChatGPT conversation for: {}", url);

        let messages = vec![
            Message::user(EXAMPLE_QUESTION).with_raw_html(""),
            Message::assistant(example_answer()).with_raw_html(""),
        ];

        Conversation::new(messages, url, title)
    }

    fn name(&self) -> &'static str {
        "chatgpt"
    }
}
