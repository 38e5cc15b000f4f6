//! `header` blocks.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;

pub(super) const TYPE: &str = "header";

#[derive(Deserialize)]
struct Header {
    text: String,
    level: u8,
}

/// Renders headings as `<hN>` or `#`-prefixed lines.
pub struct HeaderHandler;

impl HeaderHandler {
    fn parse(block: &Block) -> Result<Header, RenderError> {
        let header: Header = block.decode()?;
        if !(1..=6).contains(&header.level) {
            return Err(RenderError::InvalidField {
                block_type: TYPE.to_owned(),
                field: "level",
                message: format!("must be between 1 and 6, got {}", header.level),
            });
        }
        Ok(header)
    }
}

impl HtmlBlockHandler for HeaderHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        let Header { text, level } = Self::parse(block)?;
        Ok(format!("<h{level}>{text}</h{level}>"))
    }
}

impl MarkdownBlockHandler for HeaderHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        let Header { text, level } = Self::parse(block)?;
        Ok(format!("{} {text}", "#".repeat(usize::from(level))))
    }
}
