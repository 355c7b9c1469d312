/*
 * emitter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Shape walker output into the render document handed to the
 * presentation layer.
 */

use crate::resolver::{Citation, ResolvedNode, TextStyle};
use answer_types::ElementKind;
use serde::Serialize;

/// An interactive reference to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// The citation number as shown to the reader.
    pub label: String,
    /// Link target; `None` when the source URL is not an absolute URI,
    /// in which case the label is shown without a link.
    pub target: Option<String>,
    /// The source title.
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "t", content = "c")]
pub enum RenderNode {
    Element {
        kind: ElementKind,
        children: Vec<RenderNode>,
    },
    Text {
        content: String,
        style: TextStyle,
    },
    Reference(Reference),
}

/// The render-ready form of one answer. Built fresh on every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderDocument {
    pub nodes: Vec<RenderNode>,
}

impl RenderDocument {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every reference in document order.
    pub fn references(&self) -> Vec<&Reference> {
        let mut out = Vec::new();
        collect_references(&self.nodes, &mut out);
        out
    }
}

fn collect_references<'a>(nodes: &'a [RenderNode], out: &mut Vec<&'a Reference>) {
    for node in nodes {
        match node {
            RenderNode::Reference(reference) => out.push(reference),
            RenderNode::Element { children, .. } => collect_references(children, out),
            RenderNode::Text { .. } => {}
        }
    }
}

pub fn emit(resolved: Vec<ResolvedNode>) -> RenderDocument {
    RenderDocument {
        nodes: resolved.into_iter().map(emit_node).collect(),
    }
}

fn emit_node(node: ResolvedNode) -> RenderNode {
    match node {
        ResolvedNode::Structural(element) => RenderNode::Element {
            kind: element.kind,
            children: element.children.into_iter().map(emit_node).collect(),
        },
        ResolvedNode::TextRun(run) => RenderNode::Text {
            content: run.content,
            style: run.style,
        },
        ResolvedNode::Citation(citation) => RenderNode::Reference(reference(citation)),
    }
}

fn reference(citation: Citation) -> Reference {
    Reference {
        label: citation.number.to_string(),
        target: link_target(&citation.source.url),
        tooltip: citation.source.title,
    }
}

/// Accept only absolute URIs as link targets.
fn link_target(url: &str) -> Option<String> {
    match url::Url::parse(url.trim()) {
        Ok(parsed) if !parsed.cannot_be_a_base() || parsed.scheme() == "mailto" => {
            Some(url.trim().to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ResolvedElement, TextRun};
    use answer_types::Source;

    fn citation(number: usize, url: &str, title: &str) -> ResolvedNode {
        ResolvedNode::Citation(Citation {
            number,
            source: Source {
                index: number,
                url: url.to_string(),
                title: title.to_string(),
            },
        })
    }

    #[test]
    fn test_citation_becomes_reference() {
        let doc = emit(vec![citation(1, "https://a.example", "A")]);
        assert_eq!(
            doc.nodes,
            vec![RenderNode::Reference(Reference {
                label: "1".to_string(),
                target: Some("https://a.example".to_string()),
                tooltip: "A".to_string(),
            })]
        );
    }

    #[test]
    fn test_unusable_urls_have_no_target() {
        for url in ["", "not a url", "/relative/path", "javascript-ish"] {
            let doc = emit(vec![citation(2, url, "T")]);
            assert_eq!(doc.references()[0].target, None, "url {url:?}");
        }
    }

    #[test]
    fn test_structural_passthrough() {
        let doc = emit(vec![ResolvedNode::Structural(ResolvedElement {
            kind: ElementKind::Heading { level: 2 },
            children: vec![
                ResolvedNode::TextRun(TextRun::plain("Title ")),
                citation(1, "https://a.example", "A"),
            ],
        })]);
        match &doc.nodes[0] {
            RenderNode::Element { kind, children } => {
                assert_eq!(kind, &ElementKind::Heading { level: 2 });
                assert_eq!(children.len(), 2);
            }
            other => panic!("Expected Element, got {other:?}"),
        }
        assert_eq!(doc.references().len(), 1);
    }

    #[test]
    fn test_empty() {
        assert!(emit(vec![]).is_empty());
    }
}
