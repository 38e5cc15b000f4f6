//! Handler contracts and per-output-kind backends.
//!
//! A block type may implement [`HtmlBlockHandler`], [`MarkdownBlockHandler`],
//! both, or neither. The [`RenderBackend`] trait ties one handler contract to
//! the output-kind specifics the engine needs: how fragments are joined, what
//! a strict failure keeps, and how a block is rendered when no handler can.

use crate::document::Block;
use crate::error::RenderError;
use crate::fallback::{html_fallback, markdown_fallback};

/// HTML generator for one block type.
pub trait HtmlBlockHandler: Send + Sync {
    /// Block type this handler renders.
    fn block_type(&self) -> &str;

    /// Render a block to HTML.
    fn generate_html(&self, block: &Block) -> Result<String, RenderError>;
}

/// Markdown generator for one block type.
pub trait MarkdownBlockHandler: Send + Sync {
    /// Block type this handler renders.
    fn block_type(&self) -> &str;

    /// Render a block to Markdown.
    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError>;
}

/// Output-kind specifics used by [`Engine`](crate::Engine).
pub trait RenderBackend {
    /// Handler contract for this output kind.
    type Handler: ?Sized + Send + Sync;

    /// Human-readable output kind for logs.
    const NAME: &'static str;

    /// Placed between consecutive block fragments.
    const SEPARATOR: &'static str;

    /// Whether a strict failure returns the fragments rendered before it.
    ///
    /// - `true` (HTML): concatenated fragments are usable as-is.
    /// - `false` (Markdown): partial output is discarded.
    const KEEP_PARTIAL_OUTPUT: bool;

    /// Type tag the handler claims.
    fn handler_type(handler: &Self::Handler) -> &str;

    /// Invoke the handler on a block.
    fn generate(handler: &Self::Handler, block: &Block) -> Result<String, RenderError>;

    /// Inert placeholder for a block that could not be rendered.
    fn fallback(block: &Block) -> String;
}

/// HTML output: fragments concatenated without separator.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    type Handler = dyn HtmlBlockHandler;

    const NAME: &'static str = "html";
    const SEPARATOR: &'static str = "";
    const KEEP_PARTIAL_OUTPUT: bool = true;

    fn handler_type(handler: &Self::Handler) -> &str {
        handler.block_type()
    }

    fn generate(handler: &Self::Handler, block: &Block) -> Result<String, RenderError> {
        handler.generate_html(block)
    }

    fn fallback(block: &Block) -> String {
        html_fallback(block)
    }
}

/// Markdown output: fragments joined by a blank line.
pub struct MarkdownBackend;

impl RenderBackend for MarkdownBackend {
    type Handler = dyn MarkdownBlockHandler;

    const NAME: &'static str = "markdown";
    const SEPARATOR: &'static str = "\n\n";
    const KEEP_PARTIAL_OUTPUT: bool = false;

    fn handler_type(handler: &Self::Handler) -> &str {
        handler.block_type()
    }

    fn generate(handler: &Self::Handler, block: &Block) -> Result<String, RenderError> {
        handler.generate_markdown(block)
    }

    fn fallback(block: &Block) -> String {
        markdown_fallback(block)
    }
}
