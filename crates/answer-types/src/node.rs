/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// Kind and attributes of a structural (non-text) markup node.
///
/// Kinds that carry literal content (code, raw HTML) keep it here rather
/// than in text children, so citation scanning never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ElementKind {
    // blocks
    Paragraph,
    Heading { level: u8 },
    BlockQuote,
    BulletList,
    OrderedList { start: usize },
    ListItem,
    CodeBlock { info: String, literal: String },
    ThematicBreak,
    HtmlBlock { literal: String },

    // inlines
    Emph,
    Strong,
    Strikethrough,
    Code { literal: String },
    Link { url: String, title: String },
    Image { url: String, title: String },
    HtmlInline { literal: String },
    SoftBreak,
    LineBreak,
}

impl ElementKind {
    /// Whether this kind is a block-level container.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            ElementKind::Paragraph
                | ElementKind::Heading { .. }
                | ElementKind::BlockQuote
                | ElementKind::BulletList
                | ElementKind::OrderedList { .. }
                | ElementKind::ListItem
                | ElementKind::CodeBlock { .. }
                | ElementKind::ThematicBreak
                | ElementKind::HtmlBlock { .. }
        )
    }

    /// Whether text below this kind is allowed to become a citation link.
    ///
    /// Links cannot nest, so link and image content stays literal.
    pub fn allows_citations(&self) -> bool {
        !matches!(self, ElementKind::Link { .. } | ElementKind::Image { .. })
    }
}

/// A node of the markup tree produced by the markup parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub children: Nodes,
}

pub type Nodes = Vec<Node>;

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn element(kind: ElementKind, children: Nodes) -> Self {
        Node::Element(Element { kind, children })
    }
}

/// A parsed markup document: the top-level sequence of block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupDocument {
    pub blocks: Nodes,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_text(node: &Node) -> String {
        match node {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(plain_text).collect(),
        }
    }

    #[test]
    fn test_plain_text_walks_children() {
        let node = Node::element(
            ElementKind::Paragraph,
            vec![
                Node::text("a "),
                Node::element(ElementKind::Strong, vec![Node::text("b")]),
                Node::text(" c"),
            ],
        );
        assert_eq!(plain_text(&node), "a b c");
    }

    #[test]
    fn test_block_classification() {
        assert!(ElementKind::Paragraph.is_block());
        assert!(ElementKind::Heading { level: 2 }.is_block());
        assert!(!ElementKind::Emph.is_block());
        assert!(!ElementKind::SoftBreak.is_block());
    }

    #[test]
    fn test_links_block_citations() {
        let link = ElementKind::Link {
            url: "https://a.example".to_string(),
            title: String::new(),
        };
        assert!(!link.allows_citations());
        assert!(ElementKind::Strong.allows_citations());
    }
}
