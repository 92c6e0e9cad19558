// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP fetching of share pages

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::config::FetchConfig;

/// Share page fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The share URL could not be parsed
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),

    /// HTTP non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// The fetch configuration failed validation
    #[error("Invalid fetch configuration: {0}")]
    Config(String),

    /// The HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

/// Fetches raw share page markup with a fixed browser identification
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a new fetcher
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        config.validate().map_err(FetchError::Config)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// GET `url` and return the response body as text
    ///
    /// Non-success statuses are errors. Nothing is retried.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Fetching share page: {}", url);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        info!("Fetched {} bytes from: {}", html.len(), url);

        Ok(html)
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
