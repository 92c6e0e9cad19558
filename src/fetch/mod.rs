// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Share page fetching
//!
//! ```text
//! Share URL → PageFetcher (GET, browser User-Agent) → HTML → ShareParser
//! ```
//!
//! No caching, no retries: a failed request is returned to the caller as a
//! [`FetchError`].

pub mod config;
pub mod fetcher;

pub use config::{FetchConfig, DEFAULT_USER_AGENT};
pub use fetcher::{FetchError, PageFetcher};
