// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for share page fetching

use std::env;

/// Desktop Chrome identification sent with every share page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for share page fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// User-Agent header value (default: desktop Chrome 91)
    pub user_agent: String,
    /// Request timeout in seconds (default: none, the HTTP client's own behavior)
    pub timeout_secs: Option<u64>,
}

impl FetchConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_agent: env::var("CHATMIX_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            timeout_secs: env::var("CHATMIX_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(defaults.timeout_secs),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}
