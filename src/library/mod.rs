// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Book retrieval and cleanup
//!
//! Downloads plain-text books from the Project Gutenberg archive and strips
//! the licence header and footer that wrap every file.
//!
//! ## Architecture
//!
//! ```text
//! Book ID → BookFetcher → candidate URLs (tried in order) → RawText
//!                                                              ↓
//!                                          clean_book_text → book body
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = BookFetcher::new(LibraryConfig::from_env())?;
//! let raw = fetcher.fetch("1342").await?;
//! let body = clean_book_text(&raw.text);
//! ```

pub mod cleaner;
pub mod config;
pub mod fetcher;
pub mod types;

pub use cleaner::{clean_book_text, END_MARKERS, START_MARKERS};
pub use config::LibraryConfig;
pub use fetcher::{decode_book_bytes, BookFetcher};
pub use types::{AttemptError, BookId, FetchError, RawText};
