//! Command implementations for the research-answer CLI.

pub mod actions;
pub mod render;

use anyhow::{Context, Result};
use std::io::Read;

/// Read a payload from a file path, or from stdin when the path is `-`.
pub fn read_payload(payload: &str) -> Result<String> {
    if payload == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read payload from stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(payload).with_context(|| format!("Failed to read payload: {payload}"))
    }
}
