//! `codeBox` blocks.
//!
//! Code arrives as editor rich text: highlighted spans and one `<div>` per
//! line. HTML output keeps it as-is; Markdown output recovers plain code.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;
use crate::strip::strip_code_markup;

pub(super) const TYPE: &str = "codeBox";

#[derive(Deserialize)]
struct CodeBox {
    language: String,
    code: String,
}

/// Renders code blocks with a language class or fence tag.
pub struct CodeBoxHandler;

impl HtmlBlockHandler for CodeBoxHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        let CodeBox { language, code } = block.decode()?;
        Ok(format!(r#"<pre><code class="{language}">{code}</code></pre>"#))
    }
}

impl MarkdownBlockHandler for CodeBoxHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        let CodeBox { language, code } = block.decode()?;
        let code = strip_code_markup(&code);
        Ok(format!("```{language}\n{code}\n```"))
    }
}
