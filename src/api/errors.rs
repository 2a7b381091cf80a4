// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

use crate::library::FetchError;
use crate::vocab::VocabError;

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempted_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    NotConfigured(String),
    BookUnavailable {
        message: String,
        attempted_urls: Vec<String>,
    },
    UpstreamError(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ApiError::BookUnavailable {
                message,
                attempted_urls,
            } => ErrorResponse {
                error: message.clone(),
                attempted_urls: Some(attempted_urls.clone()),
            },
            ApiError::InvalidRequest(msg)
            | ApiError::NotConfigured(msg)
            | ApiError::UpstreamError(msg)
            | ApiError::InternalError(msg) => ErrorResponse {
                error: msg.clone(),
                attempted_urls: None,
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::NotConfigured(_)
            | ApiError::BookUnavailable { .. }
            | ApiError::UpstreamError(_)
            | ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::NotConfigured(msg) => write!(f, "Not configured: {}", msg),
            ApiError::BookUnavailable { message, .. } => write!(f, "{}", message),
            ApiError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::AllCandidatesFailed { attempted, .. } => ApiError::BookUnavailable {
                message: format!(
                    "Could not fetch book. Please check ID. Tried URLs: {}",
                    attempted.join(", ")
                ),
                attempted_urls: attempted,
            },
            FetchError::EmptyIdentifier => {
                ApiError::InvalidRequest(FetchError::EmptyIdentifier.to_string())
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<VocabError> for ApiError {
    fn from(err: VocabError) -> Self {
        match err {
            VocabError::MissingApiKey { .. } => {
                ApiError::NotConfigured("Gemini API key not configured on server.".to_string())
            }
            other => ApiError::UpstreamError(format!(
                "An unexpected error occurred with the AI service. Details: {}",
                other
            )),
        }
    }
}
