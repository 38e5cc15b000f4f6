//! `blocks types` command implementation.

use std::io::Write;
use std::path::PathBuf;

use blocks_config::{CliSettings, Config};
use clap::Args;

use super::FormatArg;
use crate::error::CliError;

/// Arguments for the types command.
#[derive(Args)]
pub(crate) struct TypesArgs {
    /// Output format whose registry to list (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Path to configuration file (default: auto-discover blocks.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TypesArgs {
    /// Execute the types command.
    ///
    /// Prints one registered block type per line, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            format: self.format.map(Into::into),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let converter = config.converter();

        let mut stdout = std::io::stdout().lock();
        for block_type in converter.block_types(config.render.format) {
            writeln!(stdout, "{block_type}")?;
        }

        Ok(())
    }
}
