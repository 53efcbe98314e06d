//! Title cleanup for renumbered headings.
//!
//! A captured title may still carry inline markup, a numbering prefix from
//! the source document (possibly in a notation not bound to its level), or
//! leftover `#`/`*` runs from half-written markup. Only structural markers at
//! the edges are removed; interior wording and punctuation are kept.

use regex::Regex;
use std::sync::OnceLock;

/// Strip inline markdown formatting (images, links, bold, italic, code,
/// strikethrough) and keep the displayed text.
///
/// Link and image targets are discarded. `_italic_` is only recognized at
/// word boundaries, so `snake_case_var` survives.
///
/// # Examples
///
/// ```
/// # use renumd::engine::sanitize::strip_inline_markup;
/// assert_eq!(strip_inline_markup("**bold** text"), "bold text");
/// assert_eq!(strip_inline_markup("see [docs](https://x.y)"), "see docs");
/// assert_eq!(strip_inline_markup("snake_case_var"), "snake_case_var");
/// ```
pub fn strip_inline_markup(text: &str) -> String {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            // Images before links: `![alt](src)` contains a link shape
            (Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap(), "$1"),
            (Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap(), "$1"),
            (Regex::new(r"~~(.+?)~~").unwrap(), "$1"),
            // Emphasis delimiters must hug their text, so `w * h * d` is not italics
            (Regex::new(r"\*\*([^\s*](?:[^*]*[^\s*])?)\*\*").unwrap(), "$1"),
            (Regex::new(r"__([^\s_](?:[^_]*[^\s_])?)__").unwrap(), "$1"),
            (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
            (Regex::new(r"\*([^\s*](?:[^*]*[^\s*])?)\*").unwrap(), "$1"),
            (
                Regex::new(r"(^|[^a-zA-Z0-9])_([^_]+)_([^a-zA-Z0-9]|$)").unwrap(),
                "$1$2$3",
            ),
        ]
    });

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result
}

/// Remove one leading numbering marker in any supported notation.
pub fn strip_legacy_numbering(title: &str) -> &str {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let prefix = PREFIX.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:",
            r"[一二三四五六七八九十]+、\s*",
            r"|[ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ]+、\s*",
            r"|\d+、\s*",
            r"|（[一二三四五六七八九十]+）\s*",
            r"|（[ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ]+）\s*",
            r"|[(（]\d+[)）]\s*",
            r"|[(（][A-Za-z][)）]\s*",
            r"|\d+\.\s+",
            r"|[A-Za-z]\.\s+",
            r"|[一二三四五六七八九十]+\.\s+",
            r"|[-*+]\s+",
            r")",
        ))
        .unwrap()
    });

    match prefix.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Remove stray `#`/`*` runs left at either edge by incomplete markup.
fn strip_stray_markers(title: &str) -> &str {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    let leading = LEADING.get_or_init(|| Regex::new(r"^(?:#+|\*+)\s*").unwrap());
    // A trailing hash run must be detached (`Title ##`), so `C#` is kept.
    let trailing = TRAILING.get_or_init(|| Regex::new(r"(?:\s+#+|\*+)$").unwrap());

    let title = match leading.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    };
    match trailing.find(title) {
        Some(m) => &title[..m.start()],
        None => title,
    }
}

fn sanitize_once(title: &str) -> String {
    let stripped = strip_inline_markup(title);
    let trimmed = strip_stray_markers(stripped.trim()).trim();
    strip_legacy_numbering(trimmed).trim().to_string()
}

/// Clean a heading title captured by a pattern.
///
/// Passes repeat until nothing changes, so stacked prefixes such as
/// `一、1. **Title**` are fully removed and `sanitize_title` is idempotent.
/// Every pass only deletes characters, which bounds the loop.
pub fn sanitize_title(title: &str) -> String {
    let mut current = title.trim().to_string();
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strip inline markup and a leading blockquote marker from a body line.
pub fn clean_body_text(text: &str) -> String {
    static QUOTE: OnceLock<Regex> = OnceLock::new();
    let quote = QUOTE.get_or_init(|| Regex::new(r"^>\s+").unwrap());
    let unquoted = quote.replace(text, "");
    strip_inline_markup(&unquoted).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_inline_markup() {
        assert_eq!(strip_inline_markup("**bold**"), "bold");
        assert_eq!(strip_inline_markup("__bold__"), "bold");
        assert_eq!(strip_inline_markup("*italic*"), "italic");
        assert_eq!(strip_inline_markup("_italic_"), "italic");
        assert_eq!(strip_inline_markup("`code`"), "code");
        assert_eq!(strip_inline_markup("~~gone~~"), "gone");
        assert_eq!(strip_inline_markup("![logo](img/logo.png) Home"), "logo Home");
        assert_eq!(strip_inline_markup("[API](https://example.com/api) guide"), "API guide");
        assert_eq!(strip_inline_markup("**_bold italic_**"), "bold italic");
        assert_eq!(strip_inline_markup("snake_case_var"), "snake_case_var");
    }

    #[test]
    fn test_loose_asterisks_are_not_emphasis() {
        assert_eq!(strip_inline_markup("Area = w * h * d"), "Area = w * h * d");
        assert_eq!(strip_inline_markup("a ** b ** c"), "a ** b ** c");
        assert_eq!(strip_inline_markup("2 *x* 3"), "2 x 3");
        assert_eq!(sanitize_title("Area = w * h * d"), "Area = w * h * d");
        assert_eq!(sanitize_title("Rate 5 * 3 **fast**"), "Rate 5 * 3 fast");
    }

    #[test]
    fn test_strip_legacy_numbering_any_notation() {
        assert_eq!(strip_legacy_numbering("一、概述"), "概述");
        assert_eq!(strip_legacy_numbering("（三）概述"), "概述");
        assert_eq!(strip_legacy_numbering("Ⅳ、概述"), "概述");
        assert_eq!(strip_legacy_numbering("（Ⅱ）概述"), "概述");
        assert_eq!(strip_legacy_numbering("(2) Scope"), "Scope");
        assert_eq!(strip_legacy_numbering("(b)Scope"), "Scope");
        assert_eq!(strip_legacy_numbering("3. Scope"), "Scope");
        assert_eq!(strip_legacy_numbering("B. Scope"), "Scope");
        assert_eq!(strip_legacy_numbering("五. 概述"), "概述");
        assert_eq!(strip_legacy_numbering("- Scope"), "Scope");
        assert_eq!(strip_legacy_numbering("12、概述"), "概述");
    }

    #[test]
    fn test_strip_legacy_numbering_leaves_wording() {
        assert_eq!(strip_legacy_numbering("3.5 release notes"), "3.5 release notes");
        assert_eq!(strip_legacy_numbering("e.g. this"), "e.g. this");
        assert_eq!(strip_legacy_numbering("-3 degrees"), "-3 degrees");
        assert_eq!(strip_legacy_numbering("2024年计划"), "2024年计划");
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("**Bold** Section"), "Bold Section");
        assert_eq!(sanitize_title("1. **Intro**"), "Intro");
        assert_eq!(sanitize_title("一、1. **政策核心目标**"), "政策核心目标");
        assert_eq!(sanitize_title("## Leftover"), "Leftover");
        assert_eq!(sanitize_title("**Unclosed"), "Unclosed");
        assert_eq!(sanitize_title("Closing hashes ##"), "Closing hashes");
        assert_eq!(sanitize_title("Using C#"), "Using C#");
        assert_eq!(sanitize_title("[Guide](http://x) for `cargo`"), "Guide for cargo");
        assert_eq!(sanitize_title("Why? Because: reasons, mostly."), "Why? Because: reasons, mostly.");
    }

    #[test]
    fn test_sanitize_title_is_idempotent_on_stacked_prefixes() {
        for title in ["一、二、三、x", "(1)(2) x", "### **1. x**", "* * x *", ""] {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once, "input {:?}", title);
        }
        assert_eq!(sanitize_title("一、二、三、x"), "x");
    }

    #[test]
    fn test_clean_body_text() {
        assert_eq!(clean_body_text("> **Note**: read this"), "Note: read this");
        assert_eq!(clean_body_text("- keep the `marker`"), "- keep the marker");
    }
}
