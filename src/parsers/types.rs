// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for extracted conversations

use serde::{Deserialize, Serialize};

use super::markup::{extract_code_blocks, html_to_markdown, CodeBlock};

/// Author of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged turn of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the turn
    pub role: Role,
    /// Trimmed, human-readable text
    pub content: String,
    /// Markup the content was taken from; an empty string means it was not captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            raw_html: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_raw_html(mut self, raw_html: impl Into<String>) -> Self {
        self.raw_html = Some(raw_html.into());
        self
    }

    /// Captured markup, if any was recorded for this turn
    pub fn captured_html(&self) -> Option<&str> {
        self.raw_html.as_deref().filter(|html| !html.trim().is_empty())
    }

    /// Markdown rendering of the captured markup, or the plain content when
    /// nothing was captured.
    pub fn to_markdown(&self) -> String {
        match self.captured_html() {
            Some(html) => html_to_markdown(html),
            None => self.content.clone(),
        }
    }

    /// Code blocks found in the captured markup
    pub fn code_blocks(&self) -> Vec<CodeBlock> {
        self.captured_html()
            .map(extract_code_blocks)
            .unwrap_or_default()
    }
}

/// An ordered conversation extracted from one share page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Turns in the order they were discovered on the page
    pub messages: Vec<Message>,
    /// Share URL exactly as given by the caller
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>, url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            messages,
            url: url.into(),
            title,
        }
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role == Role::User)
    }

    pub fn assistant_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role == Role::Assistant)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
