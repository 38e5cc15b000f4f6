//! `list` blocks.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;

pub(super) const TYPE: &str = "list";

#[derive(Deserialize)]
struct List {
    style: String,
    items: Vec<String>,
}

impl List {
    /// Any style other than `ordered` renders as unordered.
    fn is_ordered(&self) -> bool {
        self.style == "ordered"
    }
}

/// Renders ordered and unordered lists.
pub struct ListHandler;

impl HtmlBlockHandler for ListHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        let list: List = block.decode()?;
        let tag = if list.is_ordered() { "ol" } else { "ul" };

        let mut out = format!("<{tag}>");
        for item in &list.items {
            out.push_str("<li>");
            out.push_str(item);
            out.push_str("</li>");
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(out)
    }
}

impl MarkdownBlockHandler for ListHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        let list: List = block.decode()?;
        let prefix = if list.is_ordered() { "1. " } else { "- " };

        Ok(list
            .items
            .iter()
            .map(|item| format!("{prefix}{item}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
