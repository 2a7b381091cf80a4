// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for book fetching

use std::env;
use url::Url;

/// Public Project Gutenberg mirror
pub const DEFAULT_BASE_URL: &str = "https://www.gutenberg.org";

/// Configuration for book fetching
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Archive root that candidate paths are resolved against
    pub base_url: String,
    /// Timeout per download attempt in seconds (default: 20)
    pub timeout_secs: u64,
    /// User agent sent with every download
    pub user_agent: String,
}

impl LibraryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("GUTENBERG_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("BOOK_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: env::var("BOOK_FETCH_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url '{}' is not a valid URL: {}", self.base_url, e))?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 20,
            user_agent: format!("gutenberg-lexicon/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
