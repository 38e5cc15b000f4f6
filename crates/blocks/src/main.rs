//! blocks CLI - Block document renderer.
//!
//! Provides commands for:
//! - `render`: Render a saved block document to HTML or Markdown
//! - `types`: List the block types a format can render

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, TypesArgs};
use output::Output;

/// blocks - Render block-structured documents to HTML or Markdown.
#[derive(Parser)]
#[command(name = "blocks", version, about)]
struct Cli {
    /// Enable verbose output (per-block debug logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document.
    Render(RenderArgs),
    /// List registered block types.
    Types(TypesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Types(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
