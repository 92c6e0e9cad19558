// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Share parser trait and provider detection

use async_trait::async_trait;
use url::Url;

use super::chatgpt::ChatGptParser;
use super::claude::ClaudeParser;
use super::types::Conversation;
use crate::fetch::{FetchError, PageFetcher};

/// Trait for implementing per-provider share page parsers
///
/// Parsing never fails: markup that matches nothing degrades to fallback
/// content. Only fetching can return an error.
#[async_trait]
pub trait ShareParser: Send + Sync {
    /// Extract a conversation from share page markup
    ///
    /// # Arguments
    /// * `html` - The share page markup
    /// * `url` - The share URL, copied verbatim into the result
    fn parse_from_html(&self, html: &str, url: &str) -> Conversation;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Fetch `url` and extract its conversation
    async fn parse_from_url(
        &self,
        fetcher: &PageFetcher,
        url: &str,
    ) -> Result<Conversation, FetchError> {
        let html = fetcher.fetch(url).await?;
        Ok(self.parse_from_html(&html, url))
    }
}

/// Chat products with a share page parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    ChatGpt,
    Claude,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::ChatGpt, Provider::Claude];

    /// Detect the provider from a share URL's host
    pub fn detect(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_lowercase();

        let on_domain = |domain: &str| host == domain || host.ends_with(&format!(".{}", domain));

        if on_domain("chatgpt.com") || on_domain("chat.openai.com") {
            Some(Provider::ChatGpt)
        } else if on_domain("claude.ai") {
            Some(Provider::Claude)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::ChatGpt => "chatgpt",
            Provider::Claude => "claude",
        }
    }

    /// Parser for this provider's share pages
    pub fn parser(&self) -> Box<dyn ShareParser> {
        match self {
            Provider::ChatGpt => Box::new(ChatGptParser),
            Provider::Claude => Box::new(ClaudeParser),
        }
    }

    /// Share page used when the CLI is given no URL
    pub fn example_url(&self) -> &'static str {
        match self {
            Provider::ChatGpt => "https://chatgpt.com/share/67db5526-1ddc-8013-9824-145459e33171",
            Provider::Claude => "https://claude.ai/share/d8c56ef2-044e-4d31-a71e-8c8081bc5f00",
        }
    }

    /// File the CLI exports to when no output path is given
    pub fn default_output(&self) -> &'static str {
        match self {
            Provider::ChatGpt => "chatgpt_conversation.json",
            Provider::Claude => "claude_conversation.json",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
