// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vocabulary breakdowns for selected passages
//!
//! A selection is wrapped in a fixed instruction prompt, sent to a generative
//! model, and the model's reply is parsed defensively into a
//! [`DefinitionResult`]. Replies that are not the requested JSON degrade to a
//! plain-text definition instead of failing.

pub mod config;
pub mod gemini;
pub mod parser;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod types;

pub use config::GeminiConfig;
pub use gemini::GeminiClient;
pub use parser::{parse_definition_reply, strip_code_fences};
pub use prompt::build_definition_prompt;
pub use provider::DefinitionModel;
pub use service::VocabularyService;
pub use types::{DefinitionResult, VocabError};
