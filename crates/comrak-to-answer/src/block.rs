/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak block nodes to markup tree blocks.
 */

use crate::inline::convert_children_to_inlines;
use answer_types::{ElementKind, MarkupDocument, Node, Nodes};
use comrak::arena_tree::Node as ArenaNode;
use comrak::nodes::{Ast, ListType, NodeCodeBlock, NodeList, NodeValue};
use std::cell::RefCell;

/// Convert a comrak document to a markup document.
///
/// Never panics: a root that is not a Document is converted as a
/// single block.
pub fn convert_document<'a>(root: &'a ArenaNode<'a, RefCell<Ast>>) -> MarkupDocument {
    let is_document = matches!(root.data.borrow().value, NodeValue::Document);
    let blocks = if is_document {
        convert_children_to_blocks(root)
    } else {
        convert_block(root)
    };
    MarkupDocument { blocks }
}

/// Convert a comrak node's block children to markup blocks.
fn convert_children_to_blocks<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>) -> Nodes {
    node.children().flat_map(convert_block).collect()
}

/// Convert a comrak block node to markup blocks.
///
/// Returns a Vec because some nodes expand to their children.
fn convert_block<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>) -> Nodes {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Document => convert_children_to_blocks(node),

        NodeValue::Paragraph => vec![Node::element(
            ElementKind::Paragraph,
            convert_children_to_inlines(node),
        )],

        NodeValue::Heading(heading) => vec![Node::element(
            ElementKind::Heading {
                level: heading.level,
            },
            convert_children_to_inlines(node),
        )],

        NodeValue::CodeBlock(code_block) => vec![convert_code_block(code_block)],

        NodeValue::BlockQuote => vec![Node::element(
            ElementKind::BlockQuote,
            convert_children_to_blocks(node),
        )],

        NodeValue::List(list) => vec![convert_list(node, list)],

        NodeValue::Item(_) => vec![Node::element(
            ElementKind::ListItem,
            convert_children_to_blocks(node),
        )],

        NodeValue::ThematicBreak => vec![Node::element(ElementKind::ThematicBreak, vec![])],

        NodeValue::HtmlBlock(html) => vec![Node::element(
            ElementKind::HtmlBlock {
                literal: html.literal.to_string(),
            },
            vec![],
        )],

        // Front matter goes nowhere; an answer has no metadata
        NodeValue::FrontMatter(_) => vec![],

        _ => {
            tracing::debug!(
                node = ?std::mem::discriminant(&ast.value),
                "Unwrapping unsupported block node"
            );
            convert_children_to_blocks(node)
        }
    }
}

fn convert_code_block(code_block: &NodeCodeBlock) -> Node {
    // Keep only the language word of the info string
    let info = code_block
        .info
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string();

    Node::element(
        ElementKind::CodeBlock {
            info,
            literal: code_block.literal.to_string(),
        },
        vec![],
    )
}

fn convert_list<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>, list: &NodeList) -> Node {
    let items = node
        .children()
        .map(|child| convert_list_item(child, list.tight))
        .collect();

    match list.list_type {
        ListType::Bullet => Node::element(ElementKind::BulletList, items),
        ListType::Ordered => Node::element(ElementKind::OrderedList { start: list.start }, items),
    }
}

fn convert_list_item<'a>(node: &'a ArenaNode<'a, RefCell<Ast>>, tight: bool) -> Node {
    let children = convert_children_to_blocks(node);

    // Tight items render their single paragraph without a wrapper
    let children = if tight {
        children
            .into_iter()
            .flat_map(|block| match block {
                Node::Element(element) if element.kind == ElementKind::Paragraph => {
                    element.children
                }
                other => vec![other],
            })
            .collect()
    } else {
        children
    };

    Node::element(ElementKind::ListItem, children)
}
