//! Paired HTML and Markdown engines behind one entry point.

use serde::Deserialize;

use crate::document::Document;
use crate::engine::{HtmlEngine, MarkdownEngine, RenderMode};
use crate::error::PartialRender;

/// Output kind produced by a [`Converter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragments concatenated.
    #[default]
    Html,
    /// Markdown fragments separated by blank lines.
    Markdown,
}

/// Converts documents to either output format.
///
/// The two engines keep independent registries.
#[derive(Debug, Default)]
pub struct Converter {
    html: HtmlEngine,
    markdown: MarkdownEngine,
}

impl Converter {
    /// Create a converter from already configured engines.
    #[must_use]
    pub fn new(html: HtmlEngine, markdown: MarkdownEngine) -> Self {
        Self { html, markdown }
    }

    /// Create a converter with every built-in handler registered.
    #[must_use]
    pub fn with_default_handlers() -> Self {
        Self::new(
            HtmlEngine::with_default_handlers(),
            MarkdownEngine::with_default_handlers(),
        )
    }

    /// Remove handlers for the given types from both engines.
    #[must_use]
    pub fn without<'a>(mut self, block_types: impl IntoIterator<Item = &'a str>) -> Self {
        for block_type in block_types {
            let html = self.html.unregister(block_type);
            let markdown = self.markdown.unregister(block_type);
            tracing::debug!(block_type, html, markdown, "Disabled block handler");
        }
        self
    }

    /// HTML engine.
    #[must_use]
    pub fn html(&self) -> &HtmlEngine {
        &self.html
    }

    /// Mutable HTML engine, for registering custom handlers.
    pub fn html_mut(&mut self) -> &mut HtmlEngine {
        &mut self.html
    }

    /// Markdown engine.
    #[must_use]
    pub fn markdown(&self) -> &MarkdownEngine {
        &self.markdown
    }

    /// Mutable Markdown engine, for registering custom handlers.
    pub fn markdown_mut(&mut self) -> &mut MarkdownEngine {
        &mut self.markdown
    }

    /// Registered block types for a format, sorted.
    #[must_use]
    pub fn block_types(&self, format: OutputFormat) -> Vec<&str> {
        match format {
            OutputFormat::Html => self.html.block_types(),
            OutputFormat::Markdown => self.markdown.block_types(),
        }
    }

    /// Render a parsed document.
    ///
    /// # Errors
    ///
    /// Fails only in [`RenderMode::Strict`]; see [`Engine::render`](crate::Engine::render).
    pub fn render(
        &self,
        document: &Document,
        format: OutputFormat,
        mode: RenderMode,
    ) -> Result<String, PartialRender> {
        match format {
            OutputFormat::Html => self.html.render_with(document, mode),
            OutputFormat::Markdown => self.markdown.render_with(document, mode),
        }
    }

    /// Parse and render the editor's saved JSON.
    ///
    /// # Errors
    ///
    /// Fails on unparseable source in any mode, and on unknown or failing
    /// blocks in [`RenderMode::Strict`].
    pub fn render_source(
        &self,
        source: &str,
        format: OutputFormat,
        mode: RenderMode,
    ) -> Result<String, PartialRender> {
        match format {
            OutputFormat::Html => self.html.render_source(source, mode),
            OutputFormat::Markdown => self.markdown.render_source(source, mode),
        }
    }
}
