//! `raw` blocks: HTML passed through unchanged.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;

pub(super) const TYPE: &str = "raw";

#[derive(Deserialize)]
struct RawHtml {
    html: String,
}

/// Passes raw HTML through to both outputs.
pub struct RawHtmlHandler;

impl HtmlBlockHandler for RawHtmlHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        Ok(block.decode::<RawHtml>()?.html)
    }
}

impl MarkdownBlockHandler for RawHtmlHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        Ok(block.decode::<RawHtml>()?.html)
    }
}
