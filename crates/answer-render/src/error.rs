/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for the boundaries of the render pipeline.
//!
//! Rendering itself never fails; these cover loading configuration,
//! reading payloads and writing downloads.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration file is not valid TOML for [`crate::RenderConfig`].
    #[error("Invalid render configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The answer payload is not valid JSON.
    #[error("Invalid answer payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Reading a configuration file failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the downloaded answer failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
