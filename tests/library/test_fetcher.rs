// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Book fetcher tests against a local archive
//!
//! The archive is an axum server on an ephemeral port that records every
//! requested path, so tests can assert the exact fallback order.

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use gutenberg_lexicon::library::{AttemptError, BookFetcher, BookId, FetchError, LibraryConfig};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Archive {
    files: Arc<HashMap<String, (StatusCode, Vec<u8>)>>,
    hits: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl Archive {
    fn with_files(files: &[(&str, StatusCode, &[u8])]) -> Self {
        let files = files
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_vec())))
            .collect();
        Self {
            files: Arc::new(files),
            ..Default::default()
        }
    }

    fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn serve_file(State(archive): State<Archive>, uri: Uri) -> Response {
    archive.hits.lock().unwrap().push(uri.path().to_string());
    if let Some(delay) = archive.delay {
        tokio::time::sleep(delay).await;
    }
    match archive.files.get(uri.path()) {
        Some((status, body)) => (*status, Bytes::from(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn spawn_archive(archive: Archive) -> String {
    let app = Router::new().fallback(serve_file).with_state(archive);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher_for(base_url: &str, timeout_secs: u64) -> BookFetcher {
    BookFetcher::new(LibraryConfig {
        base_url: base_url.to_string(),
        timeout_secs,
        ..Default::default()
    })
    .unwrap()
}

const BOOK: &[u8] = b"It is a truth universally acknowledged.";

#[tokio::test]
async fn test_primary_url_success_stops_chain() {
    let archive = Archive::with_files(&[("/files/1342/1342-0.txt", StatusCode::OK, BOOK)]);
    let base = spawn_archive(archive.clone()).await;

    let raw = fetcher_for(&base, 5).fetch("1342").await.unwrap();

    assert_eq!(raw.text, "It is a truth universally acknowledged.");
    assert_eq!(raw.source_url, format!("{}/files/1342/1342-0.txt", base));
    assert_eq!(archive.hits(), vec!["/files/1342/1342-0.txt"]);
}

#[tokio::test]
async fn test_falls_back_after_not_found() {
    let archive = Archive::with_files(&[("/cache/epub/1342/pg1342.txt", StatusCode::OK, BOOK)]);
    let base = spawn_archive(archive.clone()).await;

    let raw = fetcher_for(&base, 5).fetch("1342").await.unwrap();

    assert_eq!(raw.source_url, format!("{}/cache/epub/1342/pg1342.txt", base));
    assert_eq!(
        archive.hits(),
        vec!["/files/1342/1342-0.txt", "/cache/epub/1342/pg1342.txt"]
    );
}

#[tokio::test]
async fn test_falls_back_after_server_error() {
    let archive = Archive::with_files(&[
        ("/files/84/84-0.txt", StatusCode::SERVICE_UNAVAILABLE, b"busy"),
        ("/cache/epub/84/pg84.txt", StatusCode::OK, BOOK),
    ]);
    let base = spawn_archive(archive.clone()).await;

    let raw = fetcher_for(&base, 5).fetch("84").await.unwrap();
    assert!(raw.source_url.ends_with("/cache/epub/84/pg84.txt"));
    assert_eq!(archive.hits().len(), 2);
}

#[tokio::test]
async fn test_empty_success_stops_chain() {
    let archive = Archive::with_files(&[
        ("/files/11/11-0.txt", StatusCode::OK, b""),
        ("/cache/epub/11/pg11.txt", StatusCode::OK, BOOK),
    ]);
    let base = spawn_archive(archive.clone()).await;
    let fetcher = fetcher_for(&base, 5);

    let err = fetcher.fetch("11").await.unwrap_err();

    match err {
        FetchError::AllCandidatesFailed {
            attempted,
            last_error,
        } => {
            assert_eq!(
                attempted,
                fetcher.candidate_urls(&BookId::parse("11").unwrap())
            );
            assert_eq!(
                last_error,
                Some(AttemptError::EmptyBody(format!("{}/files/11/11-0.txt", base)))
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(archive.hits(), vec!["/files/11/11-0.txt"]);
}

#[tokio::test]
async fn test_alphanumeric_id_uses_ebooks_layout() {
    let archive = Archive::with_files(&[("/ebooks/olcott10.txt.utf-8", StatusCode::OK, BOOK)]);
    let base = spawn_archive(archive.clone()).await;

    let raw = fetcher_for(&base, 5).fetch("olcott10").await.unwrap();
    assert_eq!(raw.source_url, format!("{}/ebooks/olcott10.txt.utf-8", base));
    assert_eq!(archive.hits(), vec!["/ebooks/olcott10.txt.utf-8"]);
}

#[tokio::test]
async fn test_all_candidates_fail_lists_urls_in_order() {
    let archive = Archive::default();
    let base = spawn_archive(archive.clone()).await;
    let fetcher = fetcher_for(&base, 5);

    let err = fetcher.fetch("99999").await.unwrap_err();

    let expected = fetcher.candidate_urls(&BookId::parse("99999").unwrap());
    match err {
        FetchError::AllCandidatesFailed {
            attempted,
            last_error,
        } => {
            assert_eq!(attempted, expected);
            assert_eq!(
                attempted,
                vec![
                    format!("{}/files/99999/99999-0.txt", base),
                    format!("{}/cache/epub/99999/pg99999.txt", base),
                ]
            );
            assert_eq!(
                last_error,
                Some(AttemptError::HttpStatus {
                    status: 404,
                    url: format!("{}/cache/epub/99999/pg99999.txt", base),
                })
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(archive.hits().len(), 2);
}

#[tokio::test]
async fn test_unreachable_archive() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher_for(&format!("http://{}", addr), 5)
        .fetch("1342")
        .await
        .unwrap_err();

    match err {
        FetchError::AllCandidatesFailed {
            attempted,
            last_error,
        } => {
            assert_eq!(attempted.len(), 2);
            assert!(matches!(last_error, Some(AttemptError::Transport { .. })));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_archive_times_out() {
    let archive = Archive {
        delay: Some(Duration::from_secs(3)),
        ..Archive::with_files(&[("/files/5/5-0.txt", StatusCode::OK, BOOK)])
    };
    let base = spawn_archive(archive).await;

    let err = fetcher_for(&base, 1).fetch("5").await.unwrap_err();
    match err {
        FetchError::AllCandidatesFailed { last_error, .. } => {
            assert!(matches!(last_error, Some(AttemptError::Timeout(_))));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_latin1_body_is_decoded() {
    let archive = Archive::with_files(&[(
        "/files/7/7-0.txt",
        StatusCode::OK,
        b"Caf\xe9 au lait, na\xefve cr\xe8me",
    )]);
    let base = spawn_archive(archive).await;

    let raw = fetcher_for(&base, 5).fetch("7").await.unwrap();
    assert_eq!(raw.text, "Café au lait, naïve crème");
}

#[tokio::test]
async fn test_empty_identifier_is_rejected_without_requests() {
    let archive = Archive::default();
    let base = spawn_archive(archive.clone()).await;

    let err = fetcher_for(&base, 5).fetch("").await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyIdentifier));
    assert!(archive.hits().is_empty());
}
