/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Citation-aware rendering of research answers.
 *
 * An answer arrives as text (plain, or lightweight markup) with inline
 * citation markers such as `3` or `[3]`, together with the ordered list
 * of sources it cites. This crate turns it into a render document in
 * which every marker that names a known source is an interactive
 * reference and everything else is kept as it was.
 *
 * The pipeline is: scanner (split text into text and marker spans) ->
 * resolver (marker -> citation or literal text) -> walker (apply both to
 * every text leaf of a markup tree) -> emitter (render document).
 */

pub mod answer;
pub mod config;
pub mod emitter;
pub mod error;
pub mod html;
pub mod resolver;
pub mod scanner;
pub mod sources;
pub mod walker;

pub use answer::{
    DOWNLOAD_FILENAME, DOWNLOAD_MIME, Download, RenderedAnswer, render, render_payload,
};
pub use config::{InlineScope, MarkerSyntax, RenderConfig, RenderMode};
pub use emitter::{Reference, RenderDocument, RenderNode, emit};
pub use error::{RenderError, RenderResult};
pub use resolver::{Citation, ResolvedElement, ResolvedNode, TextRun, TextStyle, resolve};
pub use scanner::{Span, SpanKind, scan};
pub use sources::{SourceCard, source_cards};
pub use walker::Walker;

pub use answer_types::{ElementKind, Source, SourceRecord, SourceTable};
