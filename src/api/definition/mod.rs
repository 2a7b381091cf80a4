// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vocabulary definition endpoint
//!
//! Provides `POST /get_definition` for selected passages of a book.

pub mod handler;
pub mod request;

pub use handler::get_definition_handler;
pub use request::{DefinitionRequest, MAX_SELECTION_CHARS};
