//! Block document renderer with pluggable per-type handlers.
//!
//! This crate turns a block-structured document (the JSON saved by block
//! editors such as Editor.js) into HTML or Markdown. Each block carries a
//! type tag and an opaque payload; an [`Engine`] looks the tag up in its
//! registry and hands the block to the matching handler.
//!
//! # Architecture
//!
//! - [`Document`] / [`Block`]: parsed input, order preserved, payloads opaque
//! - [`HtmlBlockHandler`] / [`MarkdownBlockHandler`]: per-type handler contracts
//! - [`Engine`]: registry plus strict and lenient rendering, generic over a
//!   [`RenderBackend`] ([`HtmlBackend`] or [`MarkdownBackend`])
//! - [`Converter`]: both engines behind one entry point
//!
//! Strict rendering stops at the first block with no handler or a malformed
//! payload. Lenient rendering replaces such blocks with an inert,
//! pretty-printed dump of their payload and always finishes.
//!
//! # Example
//!
//! ```
//! use blocks_render::{Converter, OutputFormat, RenderMode};
//!
//! let source = r#"{"blocks": [
//!     {"type": "header", "data": {"text": "Title", "level": 1}},
//!     {"type": "paragraph", "data": {"text": "Body"}}
//! ]}"#;
//!
//! let converter = Converter::with_default_handlers();
//! let markdown = converter
//!     .render_source(source, OutputFormat::Markdown, RenderMode::Strict)
//!     .unwrap();
//! assert_eq!(markdown, "# Title\n\nBody");
//! ```

mod backend;
mod converter;
mod document;
mod engine;
mod error;
mod fallback;
pub mod handlers;
mod inline;
mod strip;
mod table;
mod util;

pub use backend::{
    HtmlBackend, HtmlBlockHandler, MarkdownBackend, MarkdownBlockHandler, RenderBackend,
};
pub use converter::{Converter, OutputFormat};
pub use document::{Block, Document};
pub use engine::{Engine, HtmlEngine, MarkdownEngine, RenderMode};
pub use error::{EngineError, ParseError, PartialRender, RenderError};
pub use fallback::{html_fallback, markdown_fallback};
pub use inline::inline_to_markdown;
pub use strip::{strip_code_markup, strip_tags};
pub use table::render_table;
pub use util::escape_html;
