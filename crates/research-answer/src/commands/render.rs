/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use answer_render::{
    InlineScope, MarkerSyntax, RenderConfig, RenderMode, RenderedAnswer, render_payload,
};

use super::read_payload;
use crate::{ModeArg, OutputFormat, ScopeArg, SyntaxArg};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    pub payload: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub syntax: Option<SyntaxArg>,
    pub mode: Option<ModeArg>,
    pub scope: Option<ScopeArg>,
    pub with_sources: bool,
}

/// Configuration file values, overridden by command-line flags.
fn resolve_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(syntax) = args.syntax {
        config.syntax = match syntax {
            SyntaxArg::Bare => MarkerSyntax::Bare,
            SyntaxArg::Bracketed => MarkerSyntax::Bracketed,
        };
    }
    if let Some(mode) = args.mode {
        config.mode = match mode {
            ModeArg::Plain => RenderMode::Plain,
            ModeArg::Markup => RenderMode::Markup,
        };
    }
    if let Some(scope) = args.scope {
        config.scope = match scope {
            ScopeArg::Nested => InlineScope::Nested,
            ScopeArg::Paragraph => InlineScope::Paragraph,
        };
    }

    debug!(?config, "Resolved render configuration");
    Ok(config)
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let payload = read_payload(&args.payload)?;
    let answer = render_payload(&payload, &config).context("Failed to render answer")?;

    let output = match args.format {
        OutputFormat::Html => to_html(&answer, args.with_sources),
        OutputFormat::Json => to_json(&answer, args.with_sources)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "Wrote rendered answer");
        }
        None => print!("{output}"),
    }

    Ok(())
}

fn to_html(answer: &RenderedAnswer, with_sources: bool) -> String {
    let mut html = answer.to_html();
    if !html.is_empty() && !html.ends_with('\n') {
        html.push('\n');
    }
    if with_sources {
        html.push_str(&answer_render::html::sources_to_html(&answer.source_cards()));
    }
    html
}

fn to_json(answer: &RenderedAnswer, with_sources: bool) -> Result<String> {
    let mut value = serde_json::json!({
        "document": answer.document(),
    });
    if with_sources {
        value["sources"] = serde_json::to_value(answer.source_cards())?;
    }
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}
