//! Markup tag stripping for pasted rich-text content.
//!
//! Matches are collected as distinct literal strings and removed longest
//! first. A run of consecutive tags is a single match, so a wrapper run such
//! as `<span class="a"><span class="a">` contains shorter matched strings
//! (`<span class="a">`) as substrings. Removing the shorter string first would
//! tear it out of the middle of the longer one and leave fragments behind.
//!
//! A tag-shaped substring inside literal text is stripped as well.
//!
//! Stripping is a single pass and is not idempotent on every input: removing
//! a tag can join its neighbours into a new one, so `<<b>b>` strips to `<b>`.
//! Output is meant for display, not as a sanitizer.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:</?[a-zA-Z]+?[^>]*/?>)+").unwrap());

/// Remove every markup tag from `text`.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let matched: BTreeSet<&str> = TAG_RUN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();

    let mut ordered: Vec<&str> = matched.into_iter().collect();
    // BTreeSet order breaks length ties deterministically.
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = text.to_owned();
    for tag in ordered {
        if tag.trim().is_empty() {
            continue;
        }
        result = result.replace(tag, "");
    }
    result
}

/// Rewrite `<div>` line openers to newlines, then strip remaining tags.
///
/// Rich-text editors wrap each line of pasted code in a `<div>`, so the
/// opener is the only record of the line break.
#[must_use]
pub fn strip_code_markup(code: &str) -> String {
    strip_tags(&code.replace("<div>", "\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_simple_tags() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("line<br/>next"), "linenext");
        assert_eq!(strip_tags("line<br />next"), "linenext");
    }

    #[test]
    fn test_strip_tags_with_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com" target="_blank">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_strip_plain_text_unchanged() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
        assert_eq!(strip_tags("a < b and c > d"), "a < b and c > d");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_strip_nested_runs_longest_first() {
        let input = concat!(
            r#"<span class="k"><span class="k">package</span></span> main "#,
            r#"<span class="k">x</span>"#,
        );
        assert_eq!(strip_tags(input), "package main x");
    }

    #[test]
    fn test_strip_shorter_match_inside_longer_run() {
        // `<i>` is matched on its own and also sits inside the longer run.
        let input = "<i>a</i> <b><i>c</i></b>";
        assert_eq!(strip_tags(input), "a c");
    }

    #[test]
    fn test_strip_removes_every_occurrence() {
        assert_eq!(strip_tags("<p>a</p><p>b</p><p>c</p>"), "abc");
    }

    #[test]
    fn test_strip_tag_shaped_literal_text() {
        assert_eq!(strip_tags("Vec<String> items"), "Vec items");
    }

    #[test]
    fn test_strip_idempotent() {
        let inputs = [
            "<b>bold</b> text",
            r#"<span class="a"><span class="a">x</span></span>"#,
            "plain",
            "<div>one</div><div>two</div>",
        ];
        for input in inputs {
            let once = strip_tags(input);
            assert_eq!(strip_tags(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_strip_single_pass_can_leave_new_tag() {
        let once = strip_tags("<<b>b>");
        assert_eq!(once, "<b>");
        assert_eq!(strip_tags(&once), "");
    }

    #[test]
    fn test_strip_code_markup_line_breaks() {
        let input = "<span>fn</span> main() {<div>  body</div><div>}</div>";
        assert_eq!(strip_code_markup(input), "fn main() {\n  body\n}");
    }

    #[test]
    fn test_strip_code_markup_highlighted_snippet() {
        let input = concat!(
            r#"<span class="hljs-keyword"><span class="hljs-keyword">package</span></span> main"#,
            r"<div><br></div>",
            r#"<div>import <span class="hljs-string"><span class="hljs-string">"fmt"</span></span></div>"#,
            r"<div><br></div>",
            r#"<div><span class="hljs-function"><span class="hljs-keyword"><span class="hljs-function"><span class="hljs-keyword">func</span></span></span>"#,
            r#"<span class="hljs-function"> </span><span class="hljs-title"><span class="hljs-function"><span class="hljs-title">main</span></span></span>"#,
            r#"<span class="hljs-params"><span class="hljs-function"><span class="hljs-params">()</span></span></span></span> {</div>"#,
            r#"<div>  fmt.Println(<span class="hljs-string"><span class="hljs-string">"Hello World"</span></span>)</div>"#,
            r"<div>}</div>",
        );
        assert_eq!(
            strip_code_markup(input),
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n  fmt.Println(\"Hello World\")\n}"
        );
    }
}
