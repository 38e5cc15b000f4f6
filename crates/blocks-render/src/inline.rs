//! Inline rich-text markup to Markdown conversion.
//!
//! Editors store inline formatting as HTML inside block text. The common
//! elements map to Markdown syntax; everything else is left as HTML, which
//! Markdown passes through.

use std::sync::LazyLock;

use regex::Regex;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a\s[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a>"#).unwrap()
});
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<code(?:\s[^>]*)?>(.*?)</code>").unwrap());
static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(b|strong)(?:\s[^>]*)?>(.*?)</(?:b|strong)>").unwrap());
static ITALIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(i|em)(?:\s[^>]*)?>(.*?)</(?:i|em)>").unwrap());

/// Convert inline links, code, bold, and italic markup to Markdown.
#[must_use]
pub fn inline_to_markdown(text: &str) -> String {
    let text = LINK_PATTERN.replace_all(text, "[$2]($1)");
    let text = CODE_PATTERN.replace_all(&text, "`$1`");
    let text = BOLD_PATTERN.replace_all(&text, "**$2**");
    ITALIC_PATTERN.replace_all(&text, "*$2*").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link() {
        assert_eq!(
            inline_to_markdown(r#"paragraph<a href="123">456</a>"#),
            "paragraph[456](123)"
        );
    }

    #[test]
    fn test_link_with_extra_attributes() {
        assert_eq!(
            inline_to_markdown(r#"see <a target="_blank" href="https://example.com" rel="x">docs</a>"#),
            "see [docs](https://example.com)"
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(inline_to_markdown("paragraph<code>456</code>"), "paragraph`456`");
        assert_eq!(
            inline_to_markdown(r#"<code class="inline-code">x</code>"#),
            "`x`"
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            inline_to_markdown("<b>bold</b>, <strong>strong</strong>, <i>it</i>, <em>em</em>"),
            "**bold**, **strong**, *it*, *em*"
        );
    }

    #[test]
    fn test_nested_formatting() {
        assert_eq!(
            inline_to_markdown(r#"<b><a href="/x">go</a></b>"#),
            "**[go](/x)**"
        );
    }

    #[test]
    fn test_unknown_markup_kept() {
        assert_eq!(
            inline_to_markdown(r#"<mark class="cdx-marker">hi</mark>"#),
            r#"<mark class="cdx-marker">hi</mark>"#
        );
    }

    #[test]
    fn test_similar_tag_names_untouched() {
        assert_eq!(inline_to_markdown("<br><bdi>x</bdi>"), "<br><bdi>x</bdi>");
    }
}
