/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Text coalescing: comrak may split one run of prose into several
 * sibling Text nodes (unmatched `[` and `]` become their own nodes,
 * escapes are wrapped separately). A citation such as `[12]` must be
 * seen as one string by the marker scanner, so adjacent text siblings
 * are merged back together.
 */

use answer_types::{Node, Nodes};

/// Merge adjacent `Node::Text` siblings and drop empty text.
///
/// Element nodes are left where they are; their children are not
/// revisited (conversion already coalesced them bottom-up).
pub fn coalesce_text(nodes: Nodes) -> Nodes {
    let mut result: Nodes = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Text(text) if text.is_empty() => {}
            Node::Text(text) => match result.last_mut() {
                Some(Node::Text(previous)) => previous.push_str(&text),
                _ => result.push(Node::Text(text)),
            },
            element => result.push(element),
        }
    }

    result
}
