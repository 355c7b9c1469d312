/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Split text into plain spans and citation marker spans.
 */

use crate::config::MarkerSyntax;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also accept other scripts' digits.
static BARE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("bare marker pattern is valid"));
static BRACKETED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[0-9]+\]").expect("bracketed marker pattern is valid"));

fn marker_pattern(syntax: MarkerSyntax) -> &'static Regex {
    match syntax {
        MarkerSyntax::Bare => &BARE_MARKER,
        MarkerSyntax::Bracketed => &BRACKETED_MARKER,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Marker,
}

/// A slice of scanned text. `raw` borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub raw: &'a str,
}

impl Span<'_> {
    pub fn is_marker(&self) -> bool {
        self.kind == SpanKind::Marker
    }
}

/// Split `text` into alternating text and marker spans.
///
/// The split is lossless: concatenating every span's `raw` yields
/// `text`. Empty spans are never produced, so empty input gives no
/// spans at all.
pub fn scan(text: &str, syntax: MarkerSyntax) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for found in marker_pattern(syntax).find_iter(text) {
        if found.start() > cursor {
            spans.push(Span {
                kind: SpanKind::Text,
                raw: &text[cursor..found.start()],
            });
        }
        spans.push(Span {
            kind: SpanKind::Marker,
            raw: found.as_str(),
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        spans.push(Span {
            kind: SpanKind::Text,
            raw: &text[cursor..],
        });
    }

    spans
}
