//! Inert placeholder rendering for blocks no handler could render.
//!
//! The raw payload is pretty-printed (2-space indentation) inside a code
//! container tagged with the block's original type, so content is never
//! dropped and never interpreted as live markup.

use crate::document::Block;
use crate::util::{escape_html, longest_run};

/// Pretty-print a block payload.
fn pretty_payload(block: &Block) -> String {
    // Serializing a `Value` cannot fail: map keys are always strings.
    serde_json::to_string_pretty(block.payload()).unwrap_or_default()
}

/// Render a block as an escaped `<pre><code>` element.
#[must_use]
pub fn html_fallback(block: &Block) -> String {
    format!(
        r#"<pre><code class="language-json" data-block-type="{}">{}</code></pre>"#,
        escape_html(block.block_type()),
        escape_html(&pretty_payload(block))
    )
}

/// Render a block as a fenced JSON code block.
///
/// The block type goes into the fence info string as `block=TYPE`. The fence
/// is always longer than any backtick run inside the payload.
#[must_use]
pub fn markdown_fallback(block: &Block) -> String {
    let json = pretty_payload(block);
    let fence = "`".repeat(longest_run(&json, '`').max(2) + 1);
    let block_type: String = block
        .block_type()
        .chars()
        .map(|c| if c == '`' || c.is_whitespace() { '_' } else { c })
        .collect();

    format!("{fence}json block={block_type}\n{json}\n{fence}")
}
