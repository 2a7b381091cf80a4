// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod books;
pub mod definition;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use books::{fetch_book_handler, BookTextResponse};
pub use definition::{get_definition_handler, DefinitionRequest, MAX_SELECTION_CHARS};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
