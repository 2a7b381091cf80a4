// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Project Gutenberg boilerplate removal
//!
//! Every archive file wraps the book in a licence header and footer. The
//! header ends with a start marker line and the footer begins with an end
//! marker line; the book is whatever lies between them. Files without a start
//! marker fall back to a line-counting heuristic.

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Lines that close the licence header (matched case-insensitively)
pub const START_MARKERS: &[&str] = &[
    "*** START OF THIS PROJECT GUTENBERG EBOOK",
    "*** START OF THE PROJECT GUTENBERG EBOOK",
    "*END THE SMALL PRINT! FOR PUBLIC DOMAIN EBOOKS*",
];

/// Lines that open the licence footer (matched case-insensitively)
pub const END_MARKERS: &[&str] = &[
    "*** END OF THIS PROJECT GUTENBERG EBOOK",
    "*** END OF THE PROJECT GUTENBERG EBOOK",
    "End of the Project Gutenberg EBook",
    "End of Project Gutenberg's",
];

/// Prefix shared by the modern start markers
const CANONICAL_START: &str = "*** START OF TH";

/// Lines with more words than this count as book prose
const SUBSTANTIVE_WORDS: usize = 10;
/// Header lines scanned before the heuristic gives up
const MAX_HEADER_LINES: usize = 50;
/// Upper bound on lines skipped when nothing else locates the content
const FALLBACK_SKIP_LINES: usize = 20;

const MIN_CLEANED_CHARS: usize = 200;
const MIN_ORIGINAL_CHARS: usize = 1000;

static BREAK_RUNS: OnceLock<Regex> = OnceLock::new();

/// Confidence of a matched start marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerTier {
    /// Pre-2000s "small print" trailer; a later marker may still replace it
    Legacy,
    /// `*** START OF TH...` line; ends the scan
    Canonical,
}

/// How the content start was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartOrigin {
    Marker(MarkerTier),
    Heuristic,
    Fallback,
}

/// Forward scan state: the latest matched marker and its tier
#[derive(Debug, Default)]
struct StartScan {
    best_start: Option<usize>,
    tier: Option<MarkerTier>,
}

impl StartScan {
    /// Record a marker on line `index`. Returns true when scanning should stop.
    fn observe(&mut self, index: usize, tier: MarkerTier) -> bool {
        self.best_start = Some(index + 1);
        self.tier = Some(tier);
        tier == MarkerTier::Canonical
    }

    fn result(&self) -> Option<(usize, MarkerTier)> {
        self.best_start.zip(self.tier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContentBounds {
    start: usize,
    end: usize,
    origin: StartOrigin,
}

/// Strip archive boilerplate from a downloaded book
///
/// Never fails. When cleaning leaves almost nothing of a substantial input,
/// or nothing at all, the input is returned unchanged.
pub fn clean_book_text(text: &str) -> String {
    let lines = split_lines(text);
    let bounds = locate_content(&lines);
    debug!(
        "Content bounds: lines {}..{} of {} ({:?})",
        bounds.start,
        bounds.end,
        lines.len(),
        bounds.origin
    );

    let body = lines[bounds.start..bounds.end].join("\n");
    let cleaned = collapse_blank_runs(&body).trim().to_string();

    let original_chars = text.chars().count();
    let cleaned_chars = cleaned.chars().count();
    info!(
        "Cleaned book text: {} -> {} chars",
        original_chars, cleaned_chars
    );

    if cleaned_chars < MIN_CLEANED_CHARS && original_chars > MIN_ORIGINAL_CHARS {
        warn!(
            "Cleaned text is only {} of {} chars, returning original",
            cleaned_chars, original_chars
        );
        return text.to_string();
    }

    if cleaned.is_empty() {
        return text.to_string();
    }

    cleaned
}

fn locate_content(lines: &[&str]) -> ContentBounds {
    let (start, origin) = match find_start_marker(lines) {
        Some((start, tier)) => (start, StartOrigin::Marker(tier)),
        None => match heuristic_start(lines) {
            Some(start) => (start, StartOrigin::Heuristic),
            None => (fallback_start(lines.len()), StartOrigin::Fallback),
        },
    };

    let end = find_end_marker(lines, start).unwrap_or(lines.len());
    if end == lines.len() {
        debug!("No end marker after line {}", start);
    }

    ContentBounds { start, end, origin }
}

fn find_start_marker(lines: &[&str]) -> Option<(usize, MarkerTier)> {
    let mut scan = StartScan::default();
    for (index, line) in lines.iter().enumerate() {
        if let Some(tier) = start_marker_tier(line) {
            if scan.observe(index, tier) {
                break;
            }
        }
    }
    scan.result()
}

fn start_marker_tier(line: &str) -> Option<MarkerTier> {
    if !contains_any_marker(line, START_MARKERS) {
        return None;
    }
    if line.to_uppercase().contains(CANONICAL_START) {
        Some(MarkerTier::Canonical)
    } else {
        Some(MarkerTier::Legacy)
    }
}

/// First prose line within the leading header block
fn heuristic_start(lines: &[&str]) -> Option<usize> {
    let mut header_lines = 0;
    for (index, line) in lines.iter().enumerate() {
        if line.split_whitespace().count() > SUBSTANTIVE_WORDS {
            return Some(index);
        }
        header_lines += 1;
        if header_lines > MAX_HEADER_LINES {
            return None;
        }
    }
    None
}

fn fallback_start(line_count: usize) -> usize {
    if line_count > MAX_HEADER_LINES {
        FALLBACK_SKIP_LINES.min(line_count / 10)
    } else {
        0
    }
}

/// Closest-to-end marker line at or after `start`
fn find_end_marker(lines: &[&str], start: usize) -> Option<usize> {
    (start..lines.len())
        .rev()
        .find(|&index| contains_any_marker(lines[index], END_MARKERS))
}

fn contains_any_marker(line: &str, markers: &[&str]) -> bool {
    let line = line.to_lowercase();
    markers
        .iter()
        .any(|marker| line.contains(&marker.to_lowercase()))
}

/// Split on CRLF, bare CR, or LF
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(|c: char| c == '\r' || c == '\n') {
        lines.push(&rest[..pos]);
        let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Reduce any run of three or more line breaks to a single blank line
fn collapse_blank_runs(text: &str) -> String {
    let runs = BREAK_RUNS
        .get_or_init(|| Regex::new(r"(?:\r\n|\r|\n){3,}").expect("line break pattern is valid"));
    runs.replace_all(text, "\n\n").into_owned()
}
