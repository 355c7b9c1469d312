/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML writer for render documents.
//!
//! Raw HTML carried by the answer is written escaped: answer text comes
//! from a language model and is never trusted as markup.

use crate::config::RenderMode;
use crate::emitter::{Reference, RenderDocument, RenderNode};
use crate::resolver::TextStyle;
use crate::sources::SourceCard;
use answer_types::ElementKind;
use std::io::Write;

fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

pub fn write<W: Write>(document: &RenderDocument, writer: &mut W) -> std::io::Result<()> {
    write_nodes(&document.nodes, writer)
}

/// Render a document to an HTML string.
pub fn to_html(document: &RenderDocument) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write(document, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render a whole answer. A flat plain-text answer is wrapped in a
/// pre-wrap container so its line breaks survive.
pub fn answer_to_html(document: &RenderDocument, mode: RenderMode) -> String {
    let body = to_html(document);
    match mode {
        RenderMode::Plain => {
            format!("<div class=\"answer\" style=\"white-space: pre-wrap\">{body}</div>")
        }
        RenderMode::Markup => body,
    }
}

/// Render the source listing shown beneath an answer. No cards, no listing.
pub fn sources_to_html(cards: &[SourceCard]) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        return out;
    }
    out.push_str("<h3>Sources</h3>\n<ol class=\"sources\">\n");
    for card in cards {
        let host = card.host.as_deref().unwrap_or("");
        out.push_str(&format!(
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&card.url),
            escape_html(&card.title)
        ));
        if !host.is_empty() {
            out.push_str(&format!(" <span class=\"host\">{}</span>", escape_html(host)));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ol>\n");
    out
}

fn write_nodes<W: Write>(nodes: &[RenderNode], writer: &mut W) -> std::io::Result<()> {
    for node in nodes {
        write_node(node, writer)?;
    }
    Ok(())
}

fn write_node<W: Write>(node: &RenderNode, writer: &mut W) -> std::io::Result<()> {
    match node {
        RenderNode::Text { content, style } => match style {
            TextStyle::Plain => write!(writer, "{}", escape_html(content)),
            TextStyle::SectionHeading => write!(
                writer,
                "<strong class=\"sources-heading\" style=\"display: block\">{}</strong>",
                escape_html(content)
            ),
        },
        RenderNode::Reference(reference) => write_reference(reference, writer),
        RenderNode::Element { kind, children } => write_element(kind, children, writer),
    }
}

fn write_reference<W: Write>(reference: &Reference, writer: &mut W) -> std::io::Result<()> {
    match &reference.target {
        Some(target) => write!(
            writer,
            "<a class=\"citation\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\">{}</a>",
            escape_html(target),
            escape_html(&reference.tooltip),
            escape_html(&reference.label)
        ),
        None => write!(
            writer,
            "<span class=\"citation\" title=\"{}\">{}</span>",
            escape_html(&reference.tooltip),
            escape_html(&reference.label)
        ),
    }
}

fn write_wrapped<W: Write>(
    open: &str,
    close: &str,
    children: &[RenderNode],
    writer: &mut W,
) -> std::io::Result<()> {
    write!(writer, "{open}")?;
    write_nodes(children, writer)?;
    write!(writer, "{close}")
}

fn write_element<W: Write>(
    kind: &ElementKind,
    children: &[RenderNode],
    writer: &mut W,
) -> std::io::Result<()> {
    match kind {
        ElementKind::Paragraph => write_wrapped("<p>", "</p>\n", children, writer),
        ElementKind::Heading { level } => {
            let level = (*level).clamp(1, 6);
            write_wrapped(
                &format!("<h{level}>"),
                &format!("</h{level}>\n"),
                children,
                writer,
            )
        }
        ElementKind::BlockQuote => {
            write_wrapped("<blockquote>\n", "</blockquote>\n", children, writer)
        }
        ElementKind::BulletList => write_wrapped("<ul>\n", "</ul>\n", children, writer),
        ElementKind::OrderedList { start } => {
            let open = if *start == 1 {
                "<ol>\n".to_string()
            } else {
                format!("<ol start=\"{start}\">\n")
            };
            write_wrapped(&open, "</ol>\n", children, writer)
        }
        ElementKind::ListItem => write_wrapped("<li>", "</li>\n", children, writer),
        ElementKind::CodeBlock { info, literal } => {
            if info.is_empty() {
                write!(writer, "<pre><code>")?;
            } else {
                write!(
                    writer,
                    "<pre><code class=\"language-{}\">",
                    escape_html(info)
                )?;
            }
            writeln!(writer, "{}</code></pre>", escape_html(literal))
        }
        ElementKind::ThematicBreak => writeln!(writer, "<hr />"),
        ElementKind::HtmlBlock { literal } => writeln!(writer, "<p>{}</p>", escape_html(literal)),
        ElementKind::Emph => write_wrapped("<em>", "</em>", children, writer),
        ElementKind::Strong => write_wrapped("<strong>", "</strong>", children, writer),
        ElementKind::Strikethrough => write_wrapped("<del>", "</del>", children, writer),
        ElementKind::Code { literal } => write!(writer, "<code>{}</code>", escape_html(literal)),
        ElementKind::Link { url, title } => {
            write!(writer, "<a href=\"{}\"", escape_html(url))?;
            if !title.is_empty() {
                write!(writer, " title=\"{}\"", escape_html(title))?;
            }
            write_wrapped(">", "</a>", children, writer)
        }
        ElementKind::Image { url, title } => {
            write!(
                writer,
                "<img src=\"{}\" alt=\"{}\"",
                escape_html(url),
                escape_html(&plain_text(children))
            )?;
            if !title.is_empty() {
                write!(writer, " title=\"{}\"", escape_html(title))?;
            }
            write!(writer, " />")
        }
        ElementKind::HtmlInline { literal } => write!(writer, "{}", escape_html(literal)),
        ElementKind::SoftBreak => writeln!(writer),
        ElementKind::LineBreak => writeln!(writer, "<br />"),
    }
}

fn plain_text(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::Text { content, .. } => out.push_str(content),
            RenderNode::Reference(reference) => out.push_str(&reference.label),
            RenderNode::Element { children, .. } => out.push_str(&plain_text(children)),
        }
    }
    out
}
