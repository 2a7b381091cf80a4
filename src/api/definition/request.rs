// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Definition request types

use serde::{Deserialize, Serialize};

/// Longest selection accepted, in characters
pub const MAX_SELECTION_CHARS: usize = 1000;

/// Request body for POST /get_definition
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefinitionRequest {
    /// Selected passage (required, max 1000 chars)
    #[serde(default)]
    pub text: Option<String>,
}

impl DefinitionRequest {
    /// Validate the request and return the selection as submitted
    ///
    /// Surrounding whitespace is ignored for the blank check and the length
    /// limit but kept in the returned text.
    pub fn validate(&self) -> Result<&str, String> {
        let text = self.text.as_deref().unwrap_or_default();
        if text.trim().is_empty() {
            return Err("No text provided".to_string());
        }
        if text.trim().chars().count() > MAX_SELECTION_CHARS {
            return Err(format!(
                "Selection too long (max {} characters)",
                MAX_SELECTION_CHARS
            ));
        }
        Ok(text)
    }
}
