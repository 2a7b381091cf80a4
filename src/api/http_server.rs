// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, path::PathBuf, sync::Arc};
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::{error, info, warn};

use super::books::fetch_book_handler;
use super::definition::get_definition_handler;
use super::errors::ApiError;
use super::handlers::health_handler;
use crate::config::AppConfig;
use crate::library::BookFetcher;
use crate::vocab::{GeminiClient, VocabError, VocabularyService};

/// Shared state for all handlers
pub struct AppState {
    pub library: Arc<BookFetcher>,
    /// `None` when no model API key is configured
    pub vocabulary: Option<Arc<VocabularyService>>,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(library: Arc<BookFetcher>, vocabulary: Option<Arc<VocabularyService>>) -> Self {
        Self {
            library,
            vocabulary,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the state from configuration
    ///
    /// A missing API key is logged and leaves definitions disabled; the
    /// server still starts.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let library =
            BookFetcher::new(config.library.clone()).context("Failed to create book fetcher")?;

        let vocabulary = match GeminiClient::new(&config.gemini) {
            Ok(client) => {
                info!("Definitions enabled with model {}", config.gemini.model);
                Some(Arc::new(VocabularyService::new(Arc::new(client))))
            }
            Err(VocabError::MissingApiKey { .. }) => {
                error!("GEMINI_API_KEY is not set; /get_definition will return errors");
                None
            }
            Err(e) => return Err(e).context("Failed to create Gemini client"),
        };

        let state = Self::new(Arc::new(library), vocabulary);
        if config.static_dir.is_dir() {
            Ok(state.with_static_dir(&config.static_dir))
        } else {
            warn!(
                "Static directory {} not found; reader page will not be served",
                config.static_dir.display()
            );
            Ok(state)
        }
    }

    pub fn definitions_enabled(&self) -> bool {
        self.vocabulary.is_some()
    }
}

/// Build the application router
pub fn create_app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/fetch_book/:book_id", get(fetch_book_handler))
        .route("/get_definition", post(get_definition_handler));

    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::InternalError(format!("An unexpected server error occurred: {}", detail))
        .into_response()
}

/// Bind and serve until Ctrl+C
pub async fn start_server(config: &AppConfig) -> Result<()> {
    config.validate().map_err(anyhow::Error::msg)?;
    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;

    let state = Arc::new(AppState::from_config(config)?);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
