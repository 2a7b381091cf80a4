// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP book download with ordered URL fallback
//!
//! The archive stores the same book under several layouts. Each layout is a
//! candidate URL; candidates are tried one at a time and the first success wins.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::config::LibraryConfig;
use super::types::{AttemptError, BookId, FetchError, RawText};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Downloads book text from the archive
pub struct BookFetcher {
    client: Client,
    base_url: Url,
    config: LibraryConfig,
}

impl BookFetcher {
    /// Create a new fetcher
    pub fn new(config: LibraryConfig) -> Result<Self, FetchError> {
        config.validate().map_err(|reason| FetchError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        })?;

        let base_url = Url::parse(&config.base_url).map_err(|e| FetchError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Candidate download URLs for a book, most likely first
    ///
    /// Numeric ids are tried under `files/{id}/{id}-0.txt`, other ids under
    /// `ebooks/{id}.txt.utf-8`. Both fall back to `cache/epub/{id}/pg{id}.txt`.
    pub fn candidate_urls(&self, id: &BookId) -> Vec<String> {
        let numeric = id.is_numeric();
        let id = id.as_str();
        let primary = if numeric {
            self.archive_url(&["files", id, &format!("{}-0.txt", id)])
        } else {
            self.archive_url(&["ebooks", &format!("{}.txt.utf-8", id)])
        };
        let cached = self.archive_url(&["cache", "epub", id, &format!("pg{}.txt", id)]);

        vec![primary, cached]
    }

    /// Fetch a book, trying each candidate URL in order
    ///
    /// Returns the first successfully downloaded and decoded text. The chain
    /// stops at the first 2xx response; if that response is empty, or every
    /// candidate fails, the error lists all candidate URLs.
    pub async fn fetch(&self, identifier: &str) -> Result<RawText, FetchError> {
        let id = BookId::parse(identifier)?;
        let urls = self.candidate_urls(&id);
        let mut last_error = None;

        for (attempt, url) in urls.iter().enumerate() {
            debug!(
                "Fetching book {} ({}/{}): {}",
                id,
                attempt + 1,
                urls.len(),
                url
            );

            match self.fetch_candidate(url).await {
                Ok(text) => {
                    info!("Fetched {} chars for book {} from: {}", text.len(), id, url);
                    return Ok(RawText {
                        text,
                        source_url: url.clone(),
                    });
                }
                Err(e @ AttemptError::EmptyBody(_)) => {
                    // A 2xx ends the chain even when it carries no text
                    warn!("Book {} answered with no text, not trying further URLs: {}", id, e);
                    last_error = Some(e);
                    break;
                }
                Err(e) => {
                    warn!("Candidate failed for book {}: {}", id, e);
                    last_error = Some(e);
                }
            }
        }

        warn!("Could not fetch book {} from {} candidate URLs", id, urls.len());
        Err(FetchError::AllCandidatesFailed {
            attempted: urls,
            last_error,
        })
    }

    async fn fetch_candidate(&self, url: &str) -> Result<String, AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::attempt_error(url, e))?;

        let status = response.status();
        debug!("Archive responded {} for {}", status, url);
        if !status.is_success() {
            return Err(AttemptError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::attempt_error(url, e))?;

        if bytes.is_empty() {
            return Err(AttemptError::EmptyBody(url.to_string()));
        }

        Ok(decode_book_bytes(&bytes))
    }

    fn attempt_error(url: &str, e: reqwest::Error) -> AttemptError {
        if e.is_timeout() {
            AttemptError::Timeout(url.to_string())
        } else {
            AttemptError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }

    /// Join path segments onto the archive root, percent-encoding each one
    fn archive_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    /// Get the configuration
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }
}

/// Decode downloaded bytes as UTF-8, falling back to Latin-1
///
/// Latin-1 assigns a character to every byte value, so decoding never fails.
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_book_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!("UTF-8 decoding failed at byte {}, using Latin-1", e.valid_up_to());
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}
