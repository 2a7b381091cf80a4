// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for vocabulary lookups

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured breakdown of a selected word or phrase
///
/// Serialized with snake_case keys, the shape the reader front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionResult {
    /// The selection exactly as submitted
    pub selected_text: String,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    /// Closest Turkish word or short phrase
    pub turkish_meaning: String,
}

/// Errors that can occur while asking the model for a definition
#[derive(Debug, Error)]
pub enum VocabError {
    /// No API key configured for the model provider
    #[error("No API key configured for {provider}")]
    MissingApiKey {
        /// Name of the provider missing an API key
        provider: String,
    },

    /// Model request timed out
    #[error("Model request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Connection-level failure talking to the model
    #[error("Model request failed: {0}")]
    Transport(String),

    /// Non-success response from the model API
    #[error("Model API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// The model declined to answer the prompt
    #[error("Prompt blocked by model: {reason}")]
    Blocked {
        /// Block reason reported by the API
        reason: String,
    },

    /// The API envelope itself could not be decoded
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}
