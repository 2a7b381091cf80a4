// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::start_server;
use crate::config::AppConfig;
use crate::library::{clean_book_text, BookFetcher};

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LISTEN_ADDR")]
    pub listen: Option<String>,

    /// Directory holding index.html and assets
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Book identifier, e.g. 1342 or olcott10
    pub id: String,

    /// Print the text as downloaded, without removing header and footer
    #[arg(long)]
    pub raw: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
    }
}

pub async fn serve(args: ServeArgs, mut config: AppConfig) -> Result<()> {
    args.apply(&mut config);
    info!("Starting {}", crate::version::get_version_string());
    start_server(&config).await
}

pub async fn fetch(args: FetchArgs, config: AppConfig) -> Result<()> {
    config
        .library
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid library configuration")?;

    let fetcher = BookFetcher::new(config.library)?;
    let raw = fetcher.fetch(&args.id).await?;
    info!("Downloaded book {} from {}", args.id, raw.source_url);

    let text = if args.raw {
        raw.text
    } else {
        clean_book_text(&raw.text)
    };

    match &args.output {
        Some(path) => write_output(path, &text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} chars to {}", text.chars().count(), path.display());
    Ok(())
}
