// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Definition model trait

use async_trait::async_trait;

use super::types::VocabError;

/// A generative model that answers a text prompt with text
///
/// The reply is untrusted: callers must not assume it follows the
/// requested format.
#[async_trait]
pub trait DefinitionModel: Send + Sync {
    /// Send a prompt and return the model's raw text reply
    async fn generate(&self, prompt: &str) -> Result<String, VocabError>;

    /// Model name for logging
    fn name(&self) -> &str;
}
