//! research-answer CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "research-answer")]
#[command(version)]
#[command(about = "Render research answers with resolved source citations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an answer payload with citations resolved against its sources
    Render {
        /// Answer payload (JSON); use '-' for stdin
        payload: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Render configuration file (TOML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Citation marker syntax
        #[arg(long, value_enum)]
        syntax: Option<SyntaxArg>,

        /// Treat the answer as plain text or as markup
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Which markup text is scanned for citations
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Also list the sources beneath the answer
        #[arg(long)]
        with_sources: bool,
    },

    /// Print the original answer text, exactly as received
    Copy {
        /// Answer payload (JSON); use '-' for stdin
        payload: String,
    },

    /// Save the original answer text as research_answer.txt
    Download {
        /// Answer payload (JSON); use '-' for stdin
        payload: String,

        /// Directory to save into
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SyntaxArg {
    Bare,
    Bracketed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Plain,
    Markup,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    Nested,
    Paragraph,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "research_answer=info,answer_render=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            payload,
            format,
            output,
            config,
            syntax,
            mode,
            scope,
            with_sources,
        } => commands::render::execute(commands::render::RenderArgs {
            payload,
            format,
            output,
            config,
            syntax,
            mode,
            scope,
            with_sources,
        }),
        Commands::Copy { payload } => commands::actions::copy(&payload),
        Commands::Download { payload, dir } => commands::actions::download(&payload, &dir),
    }
}
