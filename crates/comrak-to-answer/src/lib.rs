/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak's CommonMark AST to the research answer markup tree.
 *
 * This crate is the optional markup parser in front of the citation
 * walker. It converts comrak's arena-based AST into an owned tree of
 * structural elements and text leaves. Conversion is total: node kinds
 * outside the supported subset are unwrapped to their children.
 */

mod block;
mod inline;
mod text;

pub use block::convert_document;
pub use text::coalesce_text;

use answer_types::MarkupDocument;
use comrak::{Arena, Options, parse_document};
use serde::{Deserialize, Serialize};

/// Optional CommonMark extensions understood by the converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkupExtensions {
    /// `~~strike~~` (GFM)
    pub strikethrough: bool,
    /// Bare `www.` and `https://` autolinks (GFM)
    pub autolink: bool,
}

/// Parse markup text into a markup document.
pub fn parse_markup(markdown: &str, extensions: MarkupExtensions) -> MarkupDocument {
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.strikethrough = extensions.strikethrough;
    options.extension.autolink = extensions.autolink;

    let root = parse_document(&arena, markdown, &options);
    convert_document(root)
}
