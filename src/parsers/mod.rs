// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Share page parsers
//!
//! Turns the HTML of an AI chat share page into a [`Conversation`] of
//! role-tagged messages.
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = PageFetcher::new(FetchConfig::from_env())?;
//! let provider = Provider::detect(url).unwrap_or(Provider::Claude);
//! let conversation = provider.parser().parse_from_url(&fetcher, url).await?;
//! ```

pub mod chatgpt;
pub mod claude;
pub mod extractor;
pub mod markup;
pub mod provider;
pub mod types;

pub use chatgpt::ChatGptParser;
pub use claude::ClaudeParser;
pub use markup::{
    extract_code_blocks, extract_headings, extract_lists, extract_tables, html_to_markdown,
    CodeBlock, Heading, HtmlList, ListKind, Table,
};
pub use provider::{Provider, ShareParser};
pub use types::{Conversation, Message, Role};
