// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Definition endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::request::DefinitionRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vocab::{DefinitionResult, VocabError};

/// POST /get_definition - Vocabulary breakdown of a selection
///
/// # Request
/// - `text`: selected passage (required, max 1000 chars)
///
/// # Response
/// - `selected_text`, `definition`, `synonyms`, `antonyms`, `turkish_meaning`
///
/// # Errors
/// - 500 Internal Server Error: no API key configured (checked before the
///   body is looked at), or the model call failed
/// - 400 Bad Request: body is not a JSON object, or text is missing, blank
///   or too long
pub async fn get_definition_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DefinitionRequest>, JsonRejection>,
) -> Result<Json<DefinitionResult>, ApiError> {
    let vocabulary = state.vocabulary.as_ref().ok_or_else(|| {
        ApiError::from(VocabError::MissingApiKey {
            provider: "gemini".to_string(),
        })
    })?;

    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected definition body: {}", rejection.body_text());
        ApiError::InvalidRequest("Invalid request body: expected {\"text\": string}".to_string())
    })?;

    let selection = request.validate().map_err(|e| {
        warn!("Definition validation failed: {}", e);
        ApiError::InvalidRequest(e)
    })?;

    debug!("Definition request for '{}'", selection);

    let result = vocabulary.define(selection).await?;
    Ok(Json(result))
}
