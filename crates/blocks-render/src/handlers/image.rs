//! `image` blocks.
//!
//! Display flags map to `image-tool--*` classes. Markdown image syntax has
//! nowhere to put classes, so Markdown output falls back to the HTML `<img>`
//! whenever any flag is set.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;

pub(super) const TYPE: &str = "image";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Image {
    file: ImageFile,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    with_border: bool,
    #[serde(default)]
    stretched: bool,
    #[serde(default)]
    with_background: bool,
}

#[derive(Deserialize)]
struct ImageFile {
    url: String,
}

impl Image {
    fn classes(&self) -> Vec<&'static str> {
        [
            (self.stretched, "image-tool--stretched"),
            (self.with_border, "image-tool--withBorder"),
            (self.with_background, "image-tool--withBackground"),
        ]
        .into_iter()
        .filter_map(|(set, class)| set.then_some(class))
        .collect()
    }

    fn to_html(&self) -> String {
        let classes = self.classes();
        if classes.is_empty() {
            format!(r#"<img src="{}" alt="{}" />"#, self.file.url, self.caption)
        } else {
            format!(
                r#"<img src="{}" alt="{}" class="{}"/>"#,
                self.file.url,
                self.caption,
                classes.join(" ")
            )
        }
    }

    fn has_display_flags(&self) -> bool {
        self.stretched || self.with_border || self.with_background
    }
}

/// Renders images with their display flags.
pub struct ImageHandler;

impl HtmlBlockHandler for ImageHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        Ok(block.decode::<Image>()?.to_html())
    }
}

impl MarkdownBlockHandler for ImageHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        let image: Image = block.decode()?;
        if image.has_display_flags() {
            return Ok(image.to_html());
        }
        Ok(format!(
            r#"![alt text]({} "{}")"#,
            image.file.url, image.caption
        ))
    }
}
