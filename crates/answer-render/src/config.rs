/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Render configuration.
//!
//! A [`RenderConfig`] is an explicit value handed to [`crate::render`];
//! nothing in the pipeline reads ambient state. It can be loaded from a
//! TOML file such as:
//!
//! ```toml
//! syntax = "bracketed"
//! mode = "markup"
//! scope = "nested"
//! sources-heading = false
//!
//! [extensions]
//! strikethrough = true
//! ```

use crate::error::{RenderError, RenderResult};
use comrak_to_answer::MarkupExtensions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which citation marker syntax a render pass recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSyntax {
    /// Bare digit runs (`see 3`). Any number in the text is a marker,
    /// including years and digits inside URLs.
    Bare,
    /// Bracketed digits (`see [3]`).
    #[default]
    Bracketed,
}

/// Whether the answer is rendered as flat text or parsed as markup first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Plain,
    Markup,
}

/// Which text leaves of a markup tree are scanned for markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineScope {
    /// Every text leaf, including those inside emphasis.
    #[default]
    Nested,
    /// Only text that sits directly inside a block element.
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    pub syntax: MarkerSyntax,
    pub mode: RenderMode,
    pub scope: InlineScope,
    /// Promote a text span reading "Sources" to a section heading.
    /// Plain mode only.
    pub sources_heading: bool,
    pub extensions: MarkupExtensions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            syntax: MarkerSyntax::default(),
            mode: RenderMode::default(),
            scope: InlineScope::default(),
            sources_heading: true,
            extensions: MarkupExtensions::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(input: &str) -> RenderResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> RenderResult<Self> {
        let input = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn with_syntax(mut self, syntax: MarkerSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scope(mut self, scope: InlineScope) -> Self {
        self.scope = scope;
        self
    }
}
