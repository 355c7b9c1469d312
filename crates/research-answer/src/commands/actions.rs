/*
 * actions.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Copy and download actions
 */

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use answer_render::{RenderConfig, RenderedAnswer, render_payload};

use super::read_payload;

fn load(payload: &str) -> Result<RenderedAnswer> {
    let input = read_payload(payload)?;
    render_payload(&input, &RenderConfig::default()).context("Failed to read answer payload")
}

/// Write the original answer text to stdout, byte for byte.
pub fn copy(payload: &str) -> Result<()> {
    let answer = load(payload)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(answer.copy_text().as_bytes())
        .context("Failed to write answer to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Save the original answer text as `research_answer.txt` in `dir`.
pub fn download(payload: &str, dir: &Path) -> Result<()> {
    let answer = load(payload)?;
    let path = answer
        .write_download(dir)
        .with_context(|| format!("Failed to save answer into {}", dir.display()))?;
    println!("{}", path.display());
    Ok(())
}
