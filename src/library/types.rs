// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for book retrieval

use std::fmt;
use thiserror::Error;

/// Archive identifier of a book, e.g. `1342` or `olcott10`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookId(String);

impl BookId {
    /// Accepts any non-empty token
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        if raw.is_empty() {
            return Err(FetchError::EmptyIdentifier);
        }
        Ok(Self(raw.to_string()))
    }

    /// True when every character is an ASCII digit
    pub fn is_numeric(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded book text together with the URL it was downloaded from
#[derive(Debug, Clone)]
pub struct RawText {
    pub text: String,
    pub source_url: String,
}

/// Why a single candidate URL was rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttemptError {
    /// Request exceeded the configured timeout
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// Connection or protocol failure
    #[error("HTTP error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// Server answered successfully but sent no bytes
    #[error("Empty response body from: {0}")]
    EmptyBody(String),
}

/// Errors returned by [`BookFetcher`](super::BookFetcher)
#[derive(Debug, Error)]
pub enum FetchError {
    /// Identifier was an empty string
    #[error("Book identifier must not be empty")]
    EmptyIdentifier,

    /// Configured archive root cannot be used to build URLs
    #[error("Invalid archive base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Every candidate URL failed
    #[error("Could not fetch book. Tried URLs: {}", .attempted.join(", "))]
    AllCandidatesFailed {
        /// Candidate URLs in the order they were tried
        attempted: Vec<String>,
        /// Failure of the final attempt
        last_error: Option<AttemptError>,
    },
}
