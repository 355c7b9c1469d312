/*
 * walker.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Walk a markup tree (or a flat answer string) and splice resolved
 * citations in place of the markers found in its text leaves.
 */

use crate::config::{InlineScope, MarkerSyntax, RenderConfig};
use crate::resolver::{ResolvedElement, ResolvedNode, TextStyle, resolve, text_run};
use crate::scanner::scan;
use answer_types::{Element, MarkupDocument, Node, SourceTable};

/// Walks markup trees against one source table.
///
/// Walking is a pure function of the tree, the table and the walker's
/// settings: equal inputs give equal outputs.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'t> {
    table: &'t SourceTable,
    syntax: MarkerSyntax,
    scope: InlineScope,
}

/// Where a text leaf sits, as far as resolution is concerned.
#[derive(Debug, Clone, Copy)]
struct Position {
    parent_is_block: bool,
    inside_link: bool,
}

impl Position {
    const ROOT: Position = Position {
        parent_is_block: true,
        inside_link: false,
    };
}

impl<'t> Walker<'t> {
    pub fn new(table: &'t SourceTable, syntax: MarkerSyntax, scope: InlineScope) -> Self {
        Self {
            table,
            syntax,
            scope,
        }
    }

    pub fn from_config(table: &'t SourceTable, config: &RenderConfig) -> Self {
        Self::new(table, config.syntax, config.scope)
    }

    /// Walk a flat answer string as one text leaf.
    ///
    /// With `detect_heading` set, a text span reading "Sources" becomes
    /// a section heading run.
    pub fn walk_plain(&self, text: &str, detect_heading: bool) -> Vec<ResolvedNode> {
        self.resolve_text(text, detect_heading)
    }

    pub fn walk_document(&self, document: &MarkupDocument) -> Vec<ResolvedNode> {
        self.walk_all(&document.blocks, Position::ROOT)
    }

    /// Walk one node. A text leaf may expand to several output nodes.
    pub fn walk(&self, node: &Node) -> Vec<ResolvedNode> {
        self.walk_at(node, Position::ROOT)
    }

    fn walk_all(&self, nodes: &[Node], position: Position) -> Vec<ResolvedNode> {
        nodes
            .iter()
            .flat_map(|node| self.walk_at(node, position))
            .collect()
    }

    fn walk_at(&self, node: &Node, position: Position) -> Vec<ResolvedNode> {
        match node {
            Node::Text(text) => {
                if self.resolves_at(position) {
                    self.resolve_text(text, false)
                } else if text.is_empty() {
                    vec![]
                } else {
                    vec![text_run(text, false)]
                }
            }
            Node::Element(element) => vec![self.walk_element(element, position)],
        }
    }

    fn walk_element(&self, element: &Element, position: Position) -> ResolvedNode {
        let child_position = Position {
            parent_is_block: element.kind.is_block(),
            inside_link: position.inside_link || !element.kind.allows_citations(),
        };
        ResolvedNode::Structural(ResolvedElement {
            kind: element.kind.clone(),
            children: self.walk_all(&element.children, child_position),
        })
    }

    fn resolves_at(&self, position: Position) -> bool {
        if position.inside_link {
            return false;
        }
        match self.scope {
            InlineScope::Nested => true,
            InlineScope::Paragraph => position.parent_is_block,
        }
    }

    /// Scan and resolve one text leaf.
    ///
    /// Markers that stay literal are folded into the neighbouring plain
    /// text, so a leaf without resolved citations comes back as a single
    /// run equal to the leaf.
    fn resolve_text(&self, text: &str, detect_heading: bool) -> Vec<ResolvedNode> {
        let mut out: Vec<ResolvedNode> = Vec::new();

        for span in scan(text, self.syntax) {
            let node = if span.is_marker() {
                resolve(span.raw, self.table)
            } else {
                text_run(span.raw, detect_heading)
            };

            if let (Some(ResolvedNode::TextRun(previous)), ResolvedNode::TextRun(run)) =
                (out.last_mut(), &node)
            {
                if previous.style == TextStyle::Plain && run.style == TextStyle::Plain {
                    previous.content.push_str(&run.content);
                    continue;
                }
            }
            out.push(node);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Citation, TextRun};
    use answer_types::{ElementKind, SourceRecord};

    fn one_source() -> SourceTable {
        SourceTable::from_records(vec![SourceRecord {
            url: "https://a.example".to_string(),
            title: "A".to_string(),
        }])
    }

    fn text(s: &str) -> ResolvedNode {
        ResolvedNode::TextRun(TextRun::plain(s))
    }

    fn is_citation(node: &ResolvedNode, number: usize) -> bool {
        matches!(node, ResolvedNode::Citation(Citation { number: n, .. }) if *n == number)
    }

    fn children(node: &ResolvedNode) -> &[ResolvedNode] {
        match node {
            ResolvedNode::Structural(element) => &element.children,
            other => panic!("Expected Structural, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_partial_resolution() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        let out = walker.walk_plain("Claim one [1] and claim two [9].", false);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], text("Claim one "));
        assert!(is_citation(&out[1], 1));
        assert_eq!(out[2], text(" and claim two [9]."));
    }

    #[test]
    fn test_plain_sources_heading() {
        let table = SourceTable::new();
        let walker = Walker::new(&table, MarkerSyntax::Bare, InlineScope::Nested);
        let out = walker.walk_plain("Answer 1\nSources\n", true);
        // The unresolved "1" folds into "Answer "
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], text("Answer 1"));
        assert_eq!(
            out[1],
            ResolvedNode::TextRun(TextRun {
                content: "\nSources\n".to_string(),
                style: TextStyle::SectionHeading,
            })
        );
    }

    #[test]
    fn test_text_leaf_expands_in_place() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        let para = Node::element(ElementKind::Paragraph, vec![Node::text("a [1] b")]);
        let out = walker.walk(&para);
        assert_eq!(out.len(), 1);
        let kids = children(&out[0]);
        assert_eq!(kids.len(), 3);
        assert!(is_citation(&kids[1], 1));
    }

    #[test]
    fn test_nested_scope_resolves_inside_strong() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        let para = Node::element(
            ElementKind::Paragraph,
            vec![Node::element(
                ElementKind::Strong,
                vec![Node::text("bold [1][9]")],
            )],
        );
        let out = walker.walk(&para);
        let strong = &children(&out[0])[0];
        let kids = children(strong);
        assert_eq!(kids.len(), 3);
        assert!(is_citation(&kids[1], 1));
        assert_eq!(kids[2], text("[9]"));
    }

    #[test]
    fn test_paragraph_scope_skips_emphasis() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Paragraph);
        let para = Node::element(
            ElementKind::Paragraph,
            vec![
                Node::text("top [1] "),
                Node::element(ElementKind::Emph, vec![Node::text("inner [1]")]),
            ],
        );
        let out = walker.walk(&para);
        let kids = children(&out[0]);
        assert!(is_citation(&kids[1], 1));
        let emph = kids.last().unwrap();
        assert_eq!(children(emph), &[text("inner [1]")]);
    }

    #[test]
    fn test_link_content_is_not_resolved() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        let link = Node::element(
            ElementKind::Link {
                url: "https://b.example".to_string(),
                title: String::new(),
            },
            vec![Node::element(ElementKind::Emph, vec![Node::text("see [1]")])],
        );
        let out = walker.walk(&link);
        let emph = &children(&out[0])[0];
        assert_eq!(children(emph), &[text("see [1]")]);
    }

    #[test]
    fn test_literal_kinds_untouched() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        let code = Node::element(
            ElementKind::CodeBlock {
                info: String::new(),
                literal: "x[1]".to_string(),
            },
            vec![],
        );
        let out = walker.walk(&code);
        assert_eq!(
            out,
            vec![ResolvedNode::Structural(ResolvedElement {
                kind: ElementKind::CodeBlock {
                    info: String::new(),
                    literal: "x[1]".to_string(),
                },
                children: vec![],
            })]
        );
    }

    #[test]
    fn test_empty_text_leaf_vanishes() {
        let table = one_source();
        let walker = Walker::new(&table, MarkerSyntax::Bracketed, InlineScope::Nested);
        assert!(walker.walk(&Node::text("")).is_empty());
    }
}
