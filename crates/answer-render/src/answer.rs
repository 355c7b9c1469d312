/*
 * answer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The render entry point and the answer a presentation layer holds on to.
//!
//! A [`RenderedAnswer`] keeps the original answer text next to its
//! render document. Copy and download work on that original text and
//! never see citation resolution.

use crate::config::{RenderConfig, RenderMode};
use crate::emitter::{RenderDocument, RenderNode, emit};
use crate::error::{RenderError, RenderResult};
use crate::sources::{SourceCard, source_cards};
use crate::walker::Walker;
use answer_types::{ResearchPayload, SourceTable};
use comrak_to_answer::parse_markup;
use std::path::{Path, PathBuf};

pub const DOWNLOAD_FILENAME: &str = "research_answer.txt";
pub const DOWNLOAD_MIME: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnswer {
    original: String,
    mode: RenderMode,
    sources: SourceTable,
    document: RenderDocument,
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Render an answer against its sources.
///
/// Total over its inputs: unresolvable markers, empty answers and empty
/// tables all produce a document, never an error.
pub fn render(answer: &str, sources: SourceTable, config: &RenderConfig) -> RenderedAnswer {
    let walker = Walker::from_config(&sources, config);

    let resolved = match config.mode {
        RenderMode::Plain => walker.walk_plain(answer, config.sources_heading),
        RenderMode::Markup => {
            let markup = parse_markup(answer, config.extensions);
            walker.walk_document(&markup)
        }
    };

    let document = emit(resolved);

    let references = document.references();
    let linked = references.iter().filter(|r| r.target.is_some()).count();
    tracing::debug!(
        mode = ?config.mode,
        syntax = ?config.syntax,
        sources = sources.len(),
        references = references.len(),
        unlinked = references.len() - linked,
        nodes = document.len(),
        "Rendered answer"
    );

    RenderedAnswer {
        original: answer.to_string(),
        mode: config.mode,
        sources,
        document,
    }
}

/// Parse a research service response and render it.
pub fn render_payload(json: &str, config: &RenderConfig) -> RenderResult<RenderedAnswer> {
    let payload = ResearchPayload::from_json(json)?;
    Ok(render(
        payload.answer_text(),
        payload.source_table(),
        config,
    ))
}

impl RenderedAnswer {
    pub fn document(&self) -> &RenderDocument {
        &self.document
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.document.nodes
    }

    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn source_cards(&self) -> Vec<SourceCard> {
        source_cards(&self.sources)
    }

    /// Text placed on the clipboard: the original answer, verbatim.
    pub fn copy_text(&self) -> &str {
        &self.original
    }

    pub fn download(&self) -> Download {
        Download {
            filename: DOWNLOAD_FILENAME,
            mime: DOWNLOAD_MIME,
            bytes: self.original.as_bytes().to_vec(),
        }
    }

    /// Write the download into `dir`, returning the written path.
    pub fn write_download(&self, dir: &Path) -> RenderResult<PathBuf> {
        let download = self.download();
        let path = dir.join(download.filename);
        std::fs::write(&path, &download.bytes).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = download.bytes.len(), "Saved answer");
        Ok(path)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn to_html(&self) -> String {
        crate::html::answer_to_html(&self.document, self.mode)
    }
}
