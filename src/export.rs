// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! JSON export of extracted conversations
//!
//! The exported document has the shape
//! `{ "title", "url", "messages": [{ "role", "content" }] }`. Captured markup
//! is left out.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::parsers::{Conversation, Role};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize conversation: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct ExportedConversation<'a> {
    title: Option<&'a str>,
    url: &'a str,
    messages: Vec<ExportedMessage<'a>>,
}

#[derive(Serialize)]
struct ExportedMessage<'a> {
    role: Role,
    content: &'a str,
}

impl<'a> From<&'a Conversation> for ExportedConversation<'a> {
    fn from(conversation: &'a Conversation) -> Self {
        Self {
            title: conversation.title.as_deref(),
            url: &conversation.url,
            messages: conversation
                .messages
                .iter()
                .map(|m| ExportedMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
        }
    }
}

/// Render a conversation as a pretty-printed JSON document
pub fn to_json(conversation: &Conversation) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportedConversation::from(
        conversation,
    ))?)
}

/// Write the JSON document for a conversation to `path`
pub fn write_json(conversation: &Conversation, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = to_json(conversation)?;

    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Conversation exported to {}", path.display());
    Ok(())
}
