// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the Gemini definition model

use std::env;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

/// Configuration for the Gemini definition model
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API key; definitions are disabled without one
    pub api_key: Option<String>,
    /// Model name used in the `generateContent` path
    pub model: String,
    /// API root, without the `/models/...` suffix
    pub endpoint: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: env::var("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error here; it disables the definition
    /// endpoint instead.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Gemini model name cannot be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "Gemini endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }
        if self.timeout_secs == 0 {
            return Err("Gemini timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}
