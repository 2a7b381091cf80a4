// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Book endpoint response types

use serde::{Deserialize, Serialize};

/// Response body for GET /fetch_book/:book_id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookTextResponse {
    /// Cleaned book body
    pub text: String,
}
