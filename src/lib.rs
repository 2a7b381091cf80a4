// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod library;
pub mod version;
pub mod vocab;

pub use api::{create_app, start_server, ApiError, AppState};
pub use config::AppConfig;
pub use library::{clean_book_text, BookFetcher, BookId, FetchError, LibraryConfig, RawText};
pub use vocab::{
    DefinitionModel, DefinitionResult, GeminiClient, GeminiConfig, VocabError, VocabularyService,
};
