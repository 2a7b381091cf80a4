// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Gutenberg reader with vocabulary lookups
#[derive(Parser, Debug)]
#[command(name = "gutenberg-lexicon")]
#[command(version)]
#[command(about = "Serve Project Gutenberg books with AI vocabulary lookups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve(commands::ServeArgs),

    /// Download a book and print its cleaned text
    Fetch(commands::FetchArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env();
    match cli.command {
        Some(Commands::Serve(args)) => commands::serve(args, config).await,
        None => commands::serve(commands::ServeArgs::default(), config).await,
        Some(Commands::Fetch(args)) => commands::fetch(args, config).await,
    }
}
