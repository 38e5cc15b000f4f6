//! Configuration management for blocks.
//!
//! Parses `blocks.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! format = "markdown"   # "html" (default) or "markdown"
//! mode = "lenient"      # "strict" (default) or "lenient"
//!
//! [handlers]
//! disabled = ["raw"]    # built-in block types to leave unregistered
//! ```

use std::path::{Path, PathBuf};

use blocks_render::handlers::BUILTIN_TYPES;
use blocks_render::{Converter, OutputFormat, RenderMode};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override render mode.
    pub mode: Option<RenderMode>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blocks.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Handler registry configuration.
    pub handlers: HandlersConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Handling of unknown or malformed blocks.
    pub mode: RenderMode,
}

/// Handler registry configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandlersConfig {
    /// Built-in block types to leave unregistered.
    pub disabled: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blocks.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Build a converter with the built-in handlers minus the disabled ones.
    #[must_use]
    pub fn converter(&self) -> Converter {
        Converter::with_default_handlers()
            .without(self.handlers.disabled.iter().map(String::as_str))
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.render.format = format;
        }
        if let Some(mode) = settings.mode {
            self.render.mode = mode;
        }
    }

    /// Search for config file starting at the current directory.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    /// Search for config file in `dir` and its parents.
    fn discover_config_from(mut dir: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for block_type in &self.handlers.disabled {
            if block_type.is_empty() {
                return Err(ConfigError::Validation(
                    "handlers.disabled entries cannot be empty".to_owned(),
                ));
            }
            if !BUILTIN_TYPES.contains(&block_type.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "handlers.disabled: unknown block type {block_type:?} (expected one of: {})",
                    BUILTIN_TYPES.join(", ")
                )));
            }
        }
        Ok(())
    }
}
