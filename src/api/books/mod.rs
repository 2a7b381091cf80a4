// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Book text endpoint
//!
//! Provides `GET /fetch_book/:book_id`, returning the cleaned body of a book.

pub mod handler;
pub mod response;

pub use handler::fetch_book_handler;
pub use response::BookTextResponse;
