// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /fetch_book/:book_id and static file serving

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use gutenberg_lexicon::api::{create_app, AppState, BookTextResponse, ErrorResponse};
use gutenberg_lexicon::library::{BookFetcher, LibraryConfig};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

const BOOK: &str = "The Project Gutenberg EBook of Emma, by Jane Austen\n\
Release Date: August, 1994\n\
*** START OF THIS PROJECT GUTENBERG EBOOK EMMA ***\n\
Emma Woodhouse, handsome, clever, and rich, with a comfortable home and happy disposition.\n\
\n\n\n\n\
She was the youngest of the two daughters of a most affectionate, indulgent father.\n\
*** END OF THIS PROJECT GUTENBERG EBOOK EMMA ***\n\
Updated editions will replace the previous one.\n";

/// Archive that only has the cached layout of book 158
async fn spawn_archive() -> String {
    let app = Router::new().fallback(|uri: Uri| async move {
        if uri.path() == "/cache/epub/158/pg158.txt" {
            (StatusCode::OK, BOOK).into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn state_for(base_url: &str) -> AppState {
    let fetcher = BookFetcher::new(LibraryConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap();
    AppState::new(Arc::new(fetcher), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_fetch_book_returns_cleaned_text() {
    let base = spawn_archive().await;
    let app = create_app(Arc::new(state_for(&base)));

    let (status, body) = get(app, "/fetch_book/158").await;
    assert_eq!(status, StatusCode::OK);

    let book: BookTextResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        book.text,
        "Emma Woodhouse, handsome, clever, and rich, with a comfortable home and happy disposition.\n\n\
She was the youngest of the two daughters of a most affectionate, indulgent father."
    );
}

#[tokio::test]
async fn test_fetch_book_failure_lists_attempted_urls() {
    let base = spawn_archive().await;
    let app = create_app(Arc::new(state_for(&base)));

    let (status, body) = get(app, "/fetch_book/olcott10").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    let primary = format!("{}/ebooks/olcott10.txt.utf-8", base);
    let cached = format!("{}/cache/epub/olcott10/pgolcott10.txt", base);
    assert_eq!(
        error.error,
        format!(
            "Could not fetch book. Please check ID. Tried URLs: {}, {}",
            primary, cached
        )
    );
    assert_eq!(error.attempted_urls, Some(vec![primary, cached]));
}

#[tokio::test]
async fn test_static_index_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Reader</h1>").unwrap();
    std::fs::write(dir.path().join("sw.js"), "self.addEventListener('fetch', () => {});").unwrap();

    let state = state_for("http://127.0.0.1:9").with_static_dir(dir.path());
    let app = create_app(Arc::new(state));

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<h1>Reader</h1>");

    let (status, _) = get(app.clone(), "/sw.js").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, "/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_without_static_dir() {
    let app = create_app(Arc::new(state_for("http://127.0.0.1:9")));
    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
