//! `table` blocks.
//!
//! Markdown output always treats the first row as the header row, whatever
//! `withHeadings` says. HTML output honors the flag.

use serde::Deserialize;

use crate::backend::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::document::Block;
use crate::error::RenderError;
use crate::table::render_table;

pub(super) const TYPE: &str = "table";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Table {
    #[serde(default)]
    with_headings: bool,
    content: Vec<Vec<String>>,
}

/// Renders tables as `<table>` or Markdown pipe tables.
pub struct TableHandler;

impl HtmlBlockHandler for TableHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_html(&self, block: &Block) -> Result<String, RenderError> {
        let table: Table = block.decode()?;
        let mut rows = table.content.iter();

        let mut out = String::from("<table>");
        if table.with_headings
            && let Some(header) = rows.next()
        {
            out.push_str("<thead>");
            push_html_row(&mut out, header, "th");
            out.push_str("</thead>");
        }
        out.push_str("<tbody>");
        for row in rows {
            push_html_row(&mut out, row, "td");
        }
        out.push_str("</tbody></table>");
        Ok(out)
    }
}

fn push_html_row(out: &mut String, cells: &[String], tag: &str) {
    out.push_str("<tr>");
    for cell in cells {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(cell);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out.push_str("</tr>");
}

impl MarkdownBlockHandler for TableHandler {
    fn block_type(&self) -> &str {
        TYPE
    }

    fn generate_markdown(&self, block: &Block) -> Result<String, RenderError> {
        // TODO: decide whether `withHeadings: false` should drop the header
        // and separator rows.
        Ok(render_table(&block.decode::<Table>()?.content))
    }
}
