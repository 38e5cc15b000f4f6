//! `paragraph` blocks.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;
use crate::inline::inline_to_markdown;

pub(super) const TYPE: &str = "paragraph";

#[derive(Deserialize)]
struct Paragraph {
    text: String,
    #[serde(default = "default_alignment")]
    alignment: String,
}

fn default_alignment() -> String {
    "left".to_owned()
}

impl Paragraph {
    fn aligned_html(&self) -> String {
        format!(
            r#"<p style="text-align:{}">{}</p>"#,
            self.alignment, self.text
        )
    }

    fn is_left(&self) -> bool {
        self.alignment == "left"
    }
}

/// Renders paragraphs, keeping non-default alignment as inline style.
pub struct ParagraphHandler;

impl HtmlBlockHandler for ParagraphHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        let paragraph: Paragraph = block.decode()?;
        if paragraph.is_left() {
            Ok(format!("<p>{}</p>", paragraph.text))
        } else {
            Ok(paragraph.aligned_html())
        }
    }
}

impl MarkdownBlockHandler for ParagraphHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        let paragraph: Paragraph = block.decode()?;
        if paragraph.is_left() {
            Ok(inline_to_markdown(&paragraph.text))
        } else {
            // Markdown has no alignment syntax.
            Ok(paragraph.aligned_html())
        }
    }
}
