//! Block rendering engine with a type-keyed handler registry.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;

use crate::backend::{HtmlBackend, MarkdownBackend, RenderBackend};
use crate::document::{Block, Document};
use crate::error::{EngineError, PartialRender};
use crate::handlers;

/// How unknown or failing blocks are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Abort on the first unknown or failing block.
    #[default]
    Strict,
    /// Substitute a fallback rendering and keep going.
    Lenient,
}

/// Rendering engine for one output kind.
///
/// Owns the handler registry. Build it once, then render any number of
/// documents through `&self`; rendering never mutates the engine, so a built
/// engine can be shared between threads.
///
/// # Example
///
/// ```
/// use blocks_render::{Document, HtmlEngine};
///
/// let engine = HtmlEngine::with_default_handlers();
/// let document = Document::parse(
///     r#"{"blocks": [{"type": "header", "data": {"text": "Hello", "level": 1}}]}"#,
/// )
/// .unwrap();
/// assert_eq!(engine.render(&document).unwrap(), "<h1>Hello</h1>");
/// ```
pub struct Engine<B: RenderBackend> {
    handlers: HashMap<String, Box<B::Handler>>,
    _backend: PhantomData<B>,
}

/// Engine producing HTML.
pub type HtmlEngine = Engine<HtmlBackend>;

/// Engine producing Markdown.
pub type MarkdownEngine = Engine<MarkdownBackend>;

impl<B: RenderBackend> Engine<B> {
    /// Create an engine with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            _backend: PhantomData,
        }
    }

    /// Register a handler under the type it claims.
    ///
    /// Replaces any handler already registered for that type.
    pub fn register(&mut self, handler: Box<B::Handler>) {
        let block_type = B::handler_type(&*handler).to_owned();
        if self.handlers.insert(block_type.clone(), handler).is_some() {
            tracing::debug!(backend = B::NAME, %block_type, "Replaced block handler");
        }
    }

    /// Register several handlers in order; later entries win on conflicts.
    pub fn register_all<I>(&mut self, handlers: I)
    where
        I: IntoIterator<Item = Box<B::Handler>>,
    {
        for handler in handlers {
            self.register(handler);
        }
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_handler(mut self, handler: Box<B::Handler>) -> Self {
        self.register(handler);
        self
    }

    /// Remove the handler for a type. Returns whether one was registered.
    pub fn unregister(&mut self, block_type: &str) -> bool {
        self.handlers.remove(block_type).is_some()
    }

    /// Handler registered for a type.
    #[must_use]
    pub fn handler(&self, block_type: &str) -> Option<&B::Handler> {
        self.handlers.get(block_type).map(|handler| &**handler)
    }

    /// Registered block types, sorted.
    #[must_use]
    pub fn block_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Render a document, stopping at the first unknown or failing block.
    ///
    /// # Errors
    ///
    /// Returns [`PartialRender`] carrying [`EngineError::UnknownBlockType`] or
    /// [`EngineError::Render`]. For HTML its `output` holds the fragments of
    /// the blocks before the failing one; for Markdown it is empty.
    pub fn render(&self, document: &Document) -> Result<String, PartialRender> {
        let mut fragments = Vec::with_capacity(document.len());
        for block in document.blocks() {
            match self.render_block(block) {
                Ok(fragment) => fragments.push(fragment),
                Err(error) => {
                    let output = if B::KEEP_PARTIAL_OUTPUT {
                        fragments.join(B::SEPARATOR)
                    } else {
                        String::new()
                    };
                    return Err(PartialRender { output, error });
                }
            }
        }
        Ok(fragments.join(B::SEPARATOR))
    }

    /// Render a document, substituting a fallback for every unknown or failing
    /// block. Never fails and always visits every block.
    #[must_use]
    pub fn render_lenient(&self, document: &Document) -> String {
        document
            .blocks()
            .iter()
            .map(|block| {
                self.render_block(block).unwrap_or_else(|error| {
                    tracing::warn!(
                        backend = B::NAME,
                        block_type = block.block_type(),
                        reason = %error,
                        "Rendering block as fallback"
                    );
                    B::fallback(block)
                })
            })
            .collect::<Vec<_>>()
            .join(B::SEPARATOR)
    }

    /// Render a document in the given mode.
    ///
    /// # Errors
    ///
    /// Only [`RenderMode::Strict`] can fail; see [`render`](Self::render).
    pub fn render_with(
        &self,
        document: &Document,
        mode: RenderMode,
    ) -> Result<String, PartialRender> {
        match mode {
            RenderMode::Strict => self.render(document),
            RenderMode::Lenient => Ok(self.render_lenient(document)),
        }
    }

    /// Parse the editor's saved JSON and render it in the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Parse`] with empty output if the source cannot be
    /// parsed; no block is rendered in that case. Strict rendering errors are
    /// returned as from [`render`](Self::render).
    pub fn render_source(&self, source: &str, mode: RenderMode) -> Result<String, PartialRender> {
        let document = Document::parse(source).map_err(|e| PartialRender::empty(e.into()))?;
        self.render_with(&document, mode)
    }

    fn render_block(&self, block: &Block) -> Result<String, EngineError> {
        let block_type = block.block_type();
        let handler = self
            .handlers
            .get(block_type)
            .ok_or_else(|| EngineError::UnknownBlockType(block_type.to_owned()))?;
        tracing::debug!(backend = B::NAME, block_type, "Rendering block");
        B::generate(&**handler, block).map_err(|source| EngineError::Render {
            block_type: block_type.to_owned(),
            source,
        })
    }
}

impl<B: RenderBackend> Default for Engine<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> fmt::Debug for Engine<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("backend", &B::NAME)
            .field("block_types", &self.block_types())
            .finish()
    }
}

impl HtmlEngine {
    /// Create an engine with every built-in HTML handler registered.
    #[must_use]
    pub fn with_default_handlers() -> Self {
        let mut engine = Self::new();
        engine.register_all(handlers::html_handlers());
        engine
    }
}

impl MarkdownEngine {
    /// Create an engine with every built-in Markdown handler registered.
    #[must_use]
    pub fn with_default_handlers() -> Self {
        let mut engine = Self::new();
        engine.register_all(handlers::markdown_handlers());
        engine
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
    use crate::error::RenderError;

    /// Renders `data.text` wrapped in a fixed prefix and suffix.
    struct Wrap {
        block_type: &'static str,
        open: &'static str,
        close: &'static str,
    }

    impl Wrap {
        fn text(block: &Block) -> Result<String, RenderError> {
            #[derive(Deserialize)]
            struct Data {
                text: String,
            }
            Ok(block.decode::<Data>()?.text)
        }

        fn wrap(&self, block: &Block) -> Result<String, RenderError> {
            Ok(format!("{}{}{}", self.open, Self::text(block)?, self.close))
        }
    }

    impl HtmlBlockHandler for Wrap {
        fn block_type(&self) -> &str {
            self.block_type
        }

        fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
            self.wrap(block)
        }
    }

    impl MarkdownBlockHandler for Wrap {
        fn block_type(&self) -> &str {
            self.block_type
        }

        fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
            self.wrap(block)
        }
    }

    fn para(open: &'static str, close: &'static str) -> Wrap {
        Wrap {
            block_type: "para",
            open,
            close,
        }
    }

    fn text_block(block_type: &str, text: &str) -> Block {
        Block::new(block_type, json!({ "text": text }))
    }

    fn html_engine() -> HtmlEngine {
        HtmlEngine::new().with_handler(Box::new(para("<p>", "</p>")))
    }

    fn markdown_engine() -> MarkdownEngine {
        MarkdownEngine::new().with_handler(Box::new(para("", "")))
    }

    fn with_unknown_block() -> Document {
        Document::new(vec![
            text_block("para", "first"),
            text_block("quote", "unregistered"),
            text_block("para", "last"),
        ])
    }

    fn with_malformed_block() -> Document {
        Document::new(vec![
            text_block("para", "first"),
            Block::new("para", json!({"wrong": 1})),
            text_block("para", "last"),
        ])
    }

    #[test]
    fn test_html_concatenates_fragments() {
        let document = Document::new(vec![text_block("para", "a"), text_block("para", "b")]);
        assert_eq!(html_engine().render(&document).unwrap(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_markdown_joins_with_blank_line() {
        let document = Document::new(vec![text_block("para", "a"), text_block("para", "b")]);
        assert_eq!(markdown_engine().render(&document).unwrap(), "a\n\nb");
    }

    #[test]
    fn test_empty_document_renders_empty() {
        let document = Document::default();
        assert_eq!(html_engine().render(&document).unwrap(), "");
        assert_eq!(html_engine().render_lenient(&document), "");
        assert_eq!(markdown_engine().render(&document).unwrap(), "");
        assert_eq!(markdown_engine().render_lenient(&document), "");
    }

    #[test]
    fn test_strict_html_unknown_type_keeps_partial_output() {
        let err = html_engine().render(&with_unknown_block()).unwrap_err();
        assert!(
            matches!(&err.error, EngineError::UnknownBlockType(t) if t == "quote"),
            "got {:?}",
            err.error
        );
        assert_eq!(err.output, "<p>first</p>");
    }

    #[test]
    fn test_strict_markdown_unknown_type_discards_output() {
        let err = markdown_engine().render(&with_unknown_block()).unwrap_err();
        assert!(matches!(&err.error, EngineError::UnknownBlockType(t) if t == "quote"));
        assert_eq!(err.output, "");
    }

    #[test]
    fn test_strict_handler_error_aborts() {
        let err = html_engine().render(&with_malformed_block()).unwrap_err();
        assert!(
            matches!(&err.error, EngineError::Render { block_type, .. } if block_type == "para"),
            "got {:?}",
            err.error
        );
        assert_eq!(err.output, "<p>first</p>");

        let err = markdown_engine().render(&with_malformed_block()).unwrap_err();
        assert!(matches!(err.error, EngineError::Render { .. }));
        assert_eq!(err.output, "");
    }

    #[test]
    fn test_lenient_unknown_type_uses_fallback() {
        let out = html_engine().render_lenient(&with_unknown_block());
        assert_eq!(
            out,
            concat!(
                "<p>first</p>",
                r#"<pre><code class="language-json" data-block-type="quote">{"#,
                "\n  &quot;text&quot;: &quot;unregistered&quot;\n}</code></pre>",
                "<p>last</p>"
            )
        );
    }

    #[test]
    fn test_lenient_handler_error_uses_fallback() {
        let out = markdown_engine().render_lenient(&with_malformed_block());
        assert_eq!(
            out,
            "first\n\n```json block=para\n{\n  \"wrong\": 1\n}\n```\n\nlast"
        );
    }

    #[test]
    fn test_register_overwrites() {
        let mut engine = html_engine();
        engine.register(Box::new(para("<div>", "</div>")));
        assert_eq!(engine.len(), 1);

        let document = Document::new(vec![text_block("para", "x")]);
        assert_eq!(engine.render(&document).unwrap(), "<div>x</div>");
        assert_eq!(engine.render(&document).unwrap(), "<div>x</div>");
    }

    #[test]
    fn test_register_all_later_wins() {
        let mut engine = MarkdownEngine::new();
        let handlers: Vec<Box<dyn MarkdownBlockHandler>> =
            vec![Box::new(para("1:", "")), Box::new(para("2:", ""))];
        engine.register_all(handlers);

        let document = Document::new(vec![text_block("para", "x")]);
        assert_eq!(engine.render(&document).unwrap(), "2:x");
    }

    #[test]
    fn test_registries_are_independent() {
        let html = HtmlEngine::new().with_handler(Box::new(Wrap {
            block_type: "only-html",
            open: "",
            close: "",
        }));
        let markdown = MarkdownEngine::new();

        assert_eq!(html.block_types(), vec!["only-html"]);
        assert!(markdown.is_empty());
    }

    #[test]
    fn test_unregister() {
        let mut engine = html_engine();
        assert!(engine.unregister("para"));
        assert!(!engine.unregister("para"));
        assert!(engine.handler("para").is_none());
    }

    #[test]
    fn test_render_with_mode() {
        let engine = markdown_engine();
        let document = with_unknown_block();
        assert!(engine.render_with(&document, RenderMode::Strict).is_err());
        let out = engine.render_with(&document, RenderMode::Lenient).unwrap();
        assert!(out.starts_with("first\n\n```json block=quote\n"));
        assert!(out.ends_with("\n```\n\nlast"));
    }

    #[test]
    fn test_render_source_parse_error() {
        let err = html_engine()
            .render_source("not json", RenderMode::Lenient)
            .unwrap_err();
        assert!(matches!(err.error, EngineError::Parse(_)));
        assert!(err.output.is_empty());
    }

    #[test]
    fn test_render_source() {
        let source = r#"{"blocks": [{"type": "para", "data": {"text": "hi"}}]}"#;
        assert_eq!(
            html_engine().render_source(source, RenderMode::Strict).unwrap(),
            "<p>hi</p>"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let engine = HtmlEngine::with_default_handlers();
        let document = Document::new(vec![Block::new(
            "paragraph",
            json!({"text": "shared", "alignment": "left"}),
        )]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.render(&document).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "<p>shared</p>");
            }
        });
    }

    #[test]
    fn test_render_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: RenderMode,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"mode": "lenient"}"#).unwrap();
        assert_eq!(parsed.mode, RenderMode::Lenient);
    }
}
