// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod export;
pub mod fetch;
pub mod parsers;

pub use export::{to_json, write_json, ExportError};
pub use fetch::{FetchConfig, FetchError, PageFetcher};
pub use parsers::{
    ChatGptParser, ClaudeParser, Conversation, Message, Provider, Role, ShareParser,
};
