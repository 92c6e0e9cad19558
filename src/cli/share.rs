// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::export::write_json;
use crate::fetch::{FetchConfig, PageFetcher};
use crate::parsers::extractor::preview;
use crate::parsers::{Conversation, Provider};

/// Characters of each message shown in the console summary
const PREVIEW_CHARS: usize = 100;

/// Fetch overrides shared by all commands
#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// User-Agent sent with the request (overrides CHATMIX_USER_AGENT)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (overrides CHATMIX_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl FetchArgs {
    /// Environment configuration with command line overrides applied
    pub fn config(&self) -> FetchConfig {
        let mut config = FetchConfig::from_env();
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }
        config
    }
}

/// Arguments for the per-provider commands
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Share URL (defaults to the provider's example share page)
    pub url: Option<String>,

    /// Output JSON file (defaults to <provider>_conversation.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderArg {
    Chatgpt,
    Claude,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Chatgpt => Provider::ChatGpt,
            ProviderArg::Claude => Provider::Claude,
        }
    }
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Share URL
    pub url: String,

    /// Parse this saved share page instead of fetching the URL
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Provider to use instead of detecting it from the URL
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Output JSON file (defaults to <provider>_conversation.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Fetch and export one provider's share page
pub async fn run_provider(provider: Provider, args: ShareArgs) -> Result<()> {
    let url = match args.url {
        Some(url) => {
            println!("Parsing conversation from: {}", url);
            url
        }
        None => {
            let url = provider.example_url();
            println!("No URL provided, using example: {}", url);
            url.to_string()
        }
    };

    let fetcher = PageFetcher::new(args.fetch.config())?;
    let conversation = provider.parser().parse_from_url(&fetcher, &url).await?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(provider.default_output()));
    report_and_export(&conversation, &output)
}

/// Parse a share URL with a detected or explicit provider, optionally from a
/// saved page
pub async fn run_parse(args: ParseArgs) -> Result<()> {
    let provider = match args.provider {
        Some(arg) => Provider::from(arg),
        None => Provider::detect(&args.url)
            .ok_or_else(|| anyhow!("Unsupported share URL: {}", args.url))?,
    };
    let parser = provider.parser();

    info!("Parsing {} share page: {}", provider, args.url);

    let conversation = match &args.html {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parser.parse_from_html(&html, &args.url)
        }
        None => {
            let fetcher = PageFetcher::new(args.fetch.config())?;
            parser.parse_from_url(&fetcher, &args.url).await?
        }
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(provider.default_output()));
    report_and_export(&conversation, &output)
}

/// Console summary of a conversation, one preview per message
pub fn summary(conversation: &Conversation) -> String {
    let mut out = format!(
        "\nTitle: {}\nURL: {}\nMessages: {}\n\nConversation:\n\n",
        conversation.title.as_deref().unwrap_or("(none)"),
        conversation.url,
        conversation.messages.len()
    );

    for (i, message) in conversation.messages.iter().enumerate() {
        out.push_str(&format!(
            "--- Message {} ({}) ---\n{}\n\n",
            i + 1,
            message.role,
            preview(&message.content, PREVIEW_CHARS)
        ));
    }

    out
}

fn report_and_export(conversation: &Conversation, output: &Path) -> Result<()> {
    print!("{}", summary(conversation));

    write_json(conversation, output)?;
    println!("Conversation exported to {}", output.display());
    Ok(())
}
