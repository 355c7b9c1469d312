/*
 * sources.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The source listing shown beneath an answer.
 */

use answer_types::SourceTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCard {
    pub number: usize,
    pub title: String,
    pub url: String,
    /// Hostname of `url`; absent when the URL does not parse.
    pub host: Option<String>,
}

/// One card per source, in citation order. An empty table gives no
/// cards and the listing is not shown.
pub fn source_cards(table: &SourceTable) -> Vec<SourceCard> {
    table
        .iter()
        .enumerate()
        .map(|(position, source)| SourceCard {
            number: position + 1,
            title: source.title.clone(),
            url: source.url.clone(),
            host: url::Url::parse(&source.url)
                .ok()
                .and_then(|parsed| parsed.host_str().map(str::to_string)),
        })
        .collect()
}
