//! `blocks render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use blocks_config::{CliSettings, Config};
use blocks_render::RenderMode;
use clap::Args;

use super::FormatArg;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document to render (default: read from stdin; `-` also means stdin).
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Stop at the first unknown or malformed block (overrides config).
    #[arg(long)]
    strict: bool,

    /// Render unknown or malformed blocks as payload dumps (overrides config).
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,

    /// Path to configuration file (default: auto-discover blocks.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read,
    /// strict rendering fails, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let source = read_input(self.input.as_deref())?;
        let rendered = self.render(&source, &output)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }

    /// Load configuration and render `source` with the resolved settings.
    ///
    /// A strict failure is returned with its partial output intact, after
    /// warning how much of it is being discarded.
    fn render(&self, source: &str, output: &Output) -> Result<String, CliError> {
        let cli_settings = CliSettings {
            format: self.format.map(Into::into),
            mode: self.resolve_mode(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let rendered = config
            .converter()
            .render_source(source, config.render.format, config.render.mode)
            .inspect_err(|partial| {
                if !partial.output.is_empty() {
                    output.warning(&format!(
                        "Discarding {} bytes of partial output",
                        partial.output.len()
                    ));
                }
            })?;
        Ok(rendered)
    }

    /// Resolve render mode from --strict/--lenient flags.
    fn resolve_mode(&self) -> Option<RenderMode> {
        if self.strict {
            Some(RenderMode::Strict)
        } else if self.lenient {
            Some(RenderMode::Lenient)
        } else {
            None
        }
    }
}

/// Read the document from `path`, or from stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
