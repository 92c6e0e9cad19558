// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod share;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use crate::parsers::Provider;

/// chatmix CLI
#[derive(Parser, Debug)]
#[command(name = "chatmix")]
#[command(version)]
#[command(about = "Export AI chat share pages as JSON conversations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a ChatGPT share link
    Chatgpt(share::ShareArgs),

    /// Parse a Claude share link
    Claude(share::ShareArgs),

    /// Parse any supported share link, or a saved share page
    Parse(share::ParseArgs),
}

/// Execute CLI command
///
/// Failures are reported on stderr and do not change the exit status.
pub async fn execute(cli: Cli) -> Result<()> {
    dotenv::dotenv().ok();

    let result = match cli.command {
        Commands::Chatgpt(args) => share::run_provider(Provider::ChatGpt, args).await,
        Commands::Claude(args) => share::run_provider(Provider::Claude, args).await,
        Commands::Parse(args) => share::run_parse(args).await,
    };

    if let Err(e) = result {
        error!("Share page export failed: {:#}", e);
        eprintln!("Error parsing conversation: {:#}", e);
    }

    Ok(())
}
