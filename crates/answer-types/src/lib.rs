/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Data types shared by the research answer rendering crates.
 *
 * This crate holds plain data only: the source table an answer cites,
 * the payload shapes the research service returns, and the markup tree
 * a parser hands to the citation walker.
 */

pub mod node;
pub mod payload;
pub mod source;

pub use node::{Element, ElementKind, MarkupDocument, Node, Nodes};
pub use payload::{ResearchData, ResearchPayload};
pub use source::{Source, SourceRecord, SourceTable};
