//! Built-in block handlers.
//!
//! Each handler decodes its block payload and interpolates the fields into a
//! fixed template. Type tags follow the editor's tool names.

mod code_box;
mod header;
mod image;
mod list;
mod paragraph;
mod raw;
mod table;

pub use code_box::CodeBoxHandler;
pub use header::HeaderHandler;
pub use image::ImageHandler;
pub use list::ListHandler;
pub use paragraph::ParagraphHandler;
pub use raw::RawHtmlHandler;
pub use table::TableHandler;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};

/// Type tags of all built-in handlers.
pub const BUILTIN_TYPES: &[&str] = &[
    header::TYPE,
    paragraph::TYPE,
    list::TYPE,
    code_box::TYPE,
    raw::TYPE,
    image::TYPE,
    table::TYPE,
];

/// All built-in HTML handlers.
#[must_use]
pub fn html_handlers() -> Vec<Box<dyn HtmlBlockHandler>> {
    vec![
        Box::new(HeaderHandler),
        Box::new(ParagraphHandler),
        Box::new(ListHandler),
        Box::new(CodeBoxHandler),
        Box::new(RawHtmlHandler),
        Box::new(ImageHandler),
        Box::new(TableHandler),
    ]
}

/// All built-in Markdown handlers.
#[must_use]
pub fn markdown_handlers() -> Vec<Box<dyn MarkdownBlockHandler>> {
    vec![
        Box::new(HeaderHandler),
        Box::new(ParagraphHandler),
        Box::new(ListHandler),
        Box::new(CodeBoxHandler),
        Box::new(RawHtmlHandler),
        Box::new(ImageHandler),
        Box::new(TableHandler),
    ]
}
