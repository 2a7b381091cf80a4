// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration
//!
//! Every setting comes from the environment (optionally loaded from `.env`)
//! and can be overridden from the command line.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::library::LibraryConfig;
use crate::vocab::GeminiConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Directory holding the reader page (`index.html`) and its assets
    pub static_dir: PathBuf,
    pub library: LibraryConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            library: LibraryConfig::from_env(),
            gemini: GeminiConfig::from_env(),
        }
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_addr
            .parse()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_addr, e))
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        self.library
            .validate()
            .map_err(|e| format!("Library config: {}", e))?;
        self.gemini
            .validate()
            .map_err(|e| format!("Gemini config: {}", e))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            library: LibraryConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}
