/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Resolve citation markers against the source table.
 */

use answer_types::{ElementKind, Source, SourceTable};
use serde::Serialize;

/// Presentation hint for a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    #[default]
    Plain,
    /// A "Sources" line in a plain-text answer, shown as a heading.
    SectionHeading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub content: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Plain,
        }
    }
}

/// A marker that names a source in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub number: usize,
    pub source: Source,
}

/// Output of the document walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "t", content = "c")]
pub enum ResolvedNode {
    Structural(ResolvedElement),
    TextRun(TextRun),
    Citation(Citation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedElement {
    pub kind: ElementKind,
    pub children: Vec<ResolvedNode>,
}

/// Parse the number out of a marker, with or without brackets.
///
/// Only plain ASCII digit strings are accepted; values that overflow
/// `usize` yield `None`.
pub fn marker_number(raw: &str) -> Option<usize> {
    let digits = raw
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(raw);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Resolve a marker to a citation, or keep its raw text.
///
/// Markers that do not parse or fall outside `1..=table.len()` come
/// back as a plain text run identical to `raw`.
pub fn resolve(raw: &str, table: &SourceTable) -> ResolvedNode {
    match marker_number(raw).and_then(|n| table.get(n).map(|source| (n, source))) {
        Some((number, source)) => ResolvedNode::Citation(Citation {
            number,
            source: source.clone(),
        }),
        None => ResolvedNode::TextRun(TextRun::plain(raw)),
    }
}

/// Whether a text span is the "Sources" line of a plain-text answer.
pub fn is_sources_heading(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("sources")
}

/// Wrap a non-marker span, applying the "Sources" heading hint when
/// `detect_heading` is set.
pub fn text_run(text: &str, detect_heading: bool) -> ResolvedNode {
    let style = if detect_heading && is_sources_heading(text) {
        TextStyle::SectionHeading
    } else {
        TextStyle::Plain
    };
    ResolvedNode::TextRun(TextRun {
        content: text.to_string(),
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use answer_types::SourceRecord;

    fn table(n: usize) -> SourceTable {
        (1..=n)
            .map(|i| SourceRecord {
                url: format!("https://s{i}.example"),
                title: format!("S{i}"),
            })
            .collect()
    }

    fn text(node: &ResolvedNode) -> Option<&str> {
        match node {
            ResolvedNode::TextRun(run) => Some(&run.content),
            _ => None,
        }
    }

    #[test]
    fn test_marker_number() {
        assert_eq!(marker_number("[3]"), Some(3));
        assert_eq!(marker_number("3"), Some(3));
        assert_eq!(marker_number("007"), Some(7));
        assert_eq!(marker_number("[]"), None);
        assert_eq!(marker_number("+1"), None);
        assert_eq!(marker_number("[1"), None);
        assert_eq!(marker_number("99999999999999999999999999"), None);
    }

    #[test]
    fn test_resolves_in_range() {
        let sources = table(3);
        for n in 1..=3 {
            match resolve(&format!("[{n}]"), &sources) {
                ResolvedNode::Citation(citation) => {
                    assert_eq!(citation.number, n);
                    assert_eq!(citation.source.title, format!("S{n}"));
                }
                other => panic!("Expected Citation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_out_of_range_is_literal() {
        let sources = table(1);
        assert_eq!(text(&resolve("[0]", &sources)), Some("[0]"));
        assert_eq!(text(&resolve("[2]", &sources)), Some("[2]"));
        assert_eq!(text(&resolve("5", &SourceTable::new())), Some("5"));
        assert_eq!(
            text(&resolve("[18446744073709551616]", &sources)),
            Some("[18446744073709551616]")
        );
    }

    #[test]
    fn test_leading_zero_resolves() {
        let sources = table(1);
        assert!(matches!(resolve("01", &sources), ResolvedNode::Citation(_)));
    }

    #[test]
    fn test_sources_heading() {
        assert!(is_sources_heading("\n\nSources\n"));
        assert!(is_sources_heading("SOURCES"));
        assert!(!is_sources_heading("Sources:"));
        assert_eq!(
            text_run("  sources ", true),
            ResolvedNode::TextRun(TextRun {
                content: "  sources ".to_string(),
                style: TextStyle::SectionHeading,
            })
        );
        assert_eq!(
            text_run("Sources", false),
            ResolvedNode::TextRun(TextRun::plain("Sources"))
        );
    }
}
