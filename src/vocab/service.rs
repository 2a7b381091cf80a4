// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vocabulary lookup orchestration
//!
//! Builds the prompt, calls the model, and parses the reply.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::parser::parse_definition_reply;
use super::prompt::build_definition_prompt;
use super::provider::DefinitionModel;
use super::types::{DefinitionResult, VocabError};

/// Answers definition requests with a [`DefinitionModel`]
pub struct VocabularyService {
    model: Arc<dyn DefinitionModel>,
}

impl VocabularyService {
    pub fn new(model: Arc<dyn DefinitionModel>) -> Self {
        Self { model }
    }

    /// Look up `selection`
    ///
    /// Only transport and API failures are errors; an unusable reply is
    /// returned as a plain-text definition.
    pub async fn define(&self, selection: &str) -> Result<DefinitionResult, VocabError> {
        let start = Instant::now();
        let prompt = build_definition_prompt(selection);

        let raw = self.model.generate(&prompt).await?;
        debug!("Raw reply from {}: {}", self.model.name(), raw);

        let result = parse_definition_reply(selection, &raw);
        info!(
            "Definition for '{}' from {} in {}ms",
            selection,
            self.model.name(),
            start.elapsed().as_millis()
        );
        Ok(result)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
