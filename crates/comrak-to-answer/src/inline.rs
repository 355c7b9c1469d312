/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak inline nodes to markup tree inlines.
 */

use crate::text::coalesce_text;
use answer_types::{ElementKind, Node, Nodes};
use comrak::arena_tree::Node as ArenaNode;
use comrak::nodes::{Ast, NodeLink, NodeValue};
use std::cell::RefCell;

/// Convert a comrak node's inline children to markup inlines.
///
/// Adjacent text fragments are merged so citation markers are never
/// split across leaves.
pub fn convert_children_to_inlines<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>) -> Nodes {
    let inlines = node.children().flat_map(convert_inline).collect();
    coalesce_text(inlines)
}

/// Convert a comrak inline node to markup inlines.
///
/// Returns a Vec because escapes and unsupported wrappers unwrap to
/// their children.
fn convert_inline<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>) -> Nodes {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Text(text) => vec![Node::text(text.to_string())],

        NodeValue::SoftBreak => vec![Node::element(ElementKind::SoftBreak, vec![])],

        NodeValue::LineBreak => vec![Node::element(ElementKind::LineBreak, vec![])],

        NodeValue::Code(code) => vec![Node::element(
            ElementKind::Code {
                literal: code.literal.to_string(),
            },
            vec![],
        )],

        NodeValue::Emph => vec![Node::element(
            ElementKind::Emph,
            convert_children_to_inlines(node),
        )],

        NodeValue::Strong => vec![Node::element(
            ElementKind::Strong,
            convert_children_to_inlines(node),
        )],

        NodeValue::Strikethrough => vec![Node::element(
            ElementKind::Strikethrough,
            convert_children_to_inlines(node),
        )],

        NodeValue::Link(link) => vec![Node::element(
            link_kind(link, false),
            convert_children_to_inlines(node),
        )],

        NodeValue::Image(link) => vec![Node::element(
            link_kind(link, true),
            convert_children_to_inlines(node),
        )],

        NodeValue::HtmlInline(html) => vec![Node::element(
            ElementKind::HtmlInline {
                literal: html.to_string(),
            },
            vec![],
        )],

        // Escaped characters just become the character itself
        NodeValue::Escaped => convert_children_to_inlines(node),

        // Anything outside the supported subset keeps its text content
        _ => {
            tracing::debug!(
                node = ?std::mem::discriminant(&ast.value),
                "Unwrapping unsupported inline node"
            );
            convert_children_to_inlines(node)
        }
    }
}

fn link_kind(link: &NodeLink, image: bool) -> ElementKind {
    let url = link.url.to_string();
    let title = link.title.to_string();
    if image {
        ElementKind::Image { url, title }
    } else {
        ElementKind::Link { url, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comrak::{Arena, Options, parse_document};

    fn get_first_para_inlines(markdown: &str) -> Nodes {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &Options::default());
        let para = root.first_child().expect("Expected a block");
        convert_children_to_inlines(para)
    }

    #[test]
    fn test_simple_text_is_one_leaf() {
        let inlines = get_first_para_inlines("hello world\n");
        assert_eq!(inlines, vec![Node::text("hello world")]);
    }

    #[test]
    fn test_bracket_marker_stays_together() {
        let inlines = get_first_para_inlines("The sky is blue [1].\n");
        assert_eq!(inlines, vec![Node::text("The sky is blue [1].")]);
    }

    #[test]
    fn test_adjacent_markers_stay_together() {
        let inlines = get_first_para_inlines("claims [1][9] here\n");
        assert_eq!(inlines, vec![Node::text("claims [1][9] here")]);
    }

    #[test]
    fn test_escaped_brackets_merge() {
        let inlines = get_first_para_inlines("see \\[2\\]\n");
        assert_eq!(inlines, vec![Node::text("see [2]")]);
    }

    #[test]
    fn test_strong_with_markers() {
        let inlines = get_first_para_inlines("**bold [1]**\n");
        assert_eq!(
            inlines,
            vec![Node::element(
                ElementKind::Strong,
                vec![Node::text("bold [1]")]
            )]
        );
    }

    #[test]
    fn test_inline_code_keeps_literal() {
        let inlines = get_first_para_inlines("`x[1]`\n");
        assert_eq!(
            inlines,
            vec![Node::element(
                ElementKind::Code {
                    literal: "x[1]".to_string()
                },
                vec![]
            )]
        );
    }

    #[test]
    fn test_link() {
        let inlines = get_first_para_inlines("[text](http://example.com \"Title\")\n");
        assert_eq!(
            inlines,
            vec![Node::element(
                ElementKind::Link {
                    url: "http://example.com".to_string(),
                    title: "Title".to_string()
                },
                vec![Node::text("text")]
            )]
        );
    }

    #[test]
    fn test_soft_break() {
        let inlines = get_first_para_inlines("hello\nworld\n");
        assert_eq!(inlines.len(), 3);
        assert_eq!(inlines[1], Node::element(ElementKind::SoftBreak, vec![]));
    }

    #[test]
    fn test_hard_break() {
        let inlines = get_first_para_inlines("hello\\\nworld\n");
        assert_eq!(inlines.len(), 3);
        assert_eq!(inlines[1], Node::element(ElementKind::LineBreak, vec![]));
    }
}
