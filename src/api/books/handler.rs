// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Book endpoint handler

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::response::BookTextResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::library::clean_book_text;

/// GET /fetch_book/:book_id - Download and clean a book
///
/// # Response
/// - `text`: book body with the archive header and footer removed
///
/// # Errors
/// - 500 Internal Server Error: every candidate URL failed; the body lists
///   them in `attempted_urls`
pub async fn fetch_book_handler(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<BookTextResponse>, ApiError> {
    let raw = state.library.fetch(&book_id).await.map_err(|e| {
        warn!("Book {} unavailable: {}", book_id, e);
        ApiError::from(e)
    })?;

    let source_url = raw.source_url;
    let original_chars = raw.text.chars().count();

    // Cleaning is CPU-bound on multi-megabyte texts
    let text = tokio::task::spawn_blocking(move || clean_book_text(&raw.text))
        .await
        .map_err(|e| ApiError::InternalError(format!("Cleaning task failed: {}", e)))?;

    info!(
        "Served book {} from {} ({} -> {} chars)",
        book_id,
        source_url,
        original_chars,
        text.chars().count()
    );

    Ok(Json(BookTextResponse { text }))
}
