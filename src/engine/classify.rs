//! Per-line classification into blanks, separators, headings, list items,
//! continuations and prose.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthChar;

use super::levels::{Level, LevelBindings};
use super::patterns::{HeadingPattern, PatternId};

/// Minimum indentation, in columns, for a continuation of a list item.
pub const CONTINUATION_INDENT: usize = 2;

const TAB_STOP: usize = 4;

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Separator,
    Heading { level: Level, title: String },
    ListItem(String),
    Continuation(String),
    Prose(String),
}

/// The bound patterns in the order they are tried against each line.
///
/// Markdown rules come first, deepest first, so `# ` never swallows a line
/// meant for `### `. The rest follow registry declaration order.
#[derive(Debug, Clone)]
pub struct MatchOrder {
    rules: Vec<(Level, &'static HeadingPattern)>,
}

impl MatchOrder {
    pub fn new(bindings: &LevelBindings) -> Self {
        let mut rules: Vec<_> = bindings
            .iter()
            .map(|(level, id)| (level, id.pattern()))
            .collect();
        rules.sort_by_key(|(_, pattern)| {
            (
                std::cmp::Reverse(pattern.id.hash_depth().unwrap_or(0)),
                pattern.id,
            )
        });
        log::debug!(
            "heading match order: {}",
            rules
                .iter()
                .map(|(level, pattern)| format!("{}={}", level, pattern.id))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = (Level, PatternId)> + '_ {
        self.rules.iter().map(|(level, pattern)| (*level, pattern.id))
    }

    /// First bound rule matching `line`, with its captured title.
    pub fn find<'t>(&self, line: &'t str) -> Option<(Level, &'t str)> {
        self.rules.iter().find_map(|(level, pattern)| {
            pattern.capture_title(line).map(|title| (*level, title))
        })
    }
}

/// Classifies raw input lines against a fixed match order.
#[derive(Debug, Clone)]
pub struct Classifier {
    order: MatchOrder,
}

impl Classifier {
    pub fn new(order: MatchOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &MatchOrder {
        &self.order
    }

    /// Classify `raw`, given whether the previous output was a list item.
    pub fn classify(&self, raw: &str, in_list: bool) -> LineKind {
        let line = raw.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }
        if is_separator(line) {
            return LineKind::Separator;
        }
        if let Some((level, title)) = self.order.find(line) {
            return LineKind::Heading {
                level,
                title: title.to_string(),
            };
        }
        if is_list_item(line) {
            return LineKind::ListItem(line.to_string());
        }
        if in_list && indent_width(raw) >= CONTINUATION_INDENT {
            return LineKind::Continuation(line.to_string());
        }
        LineKind::Prose(line.to_string())
    }
}

/// A thematic break: three or more dashes or asterisks and nothing else.
pub fn is_separator(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR.get_or_init(|| Regex::new(r"^[-*]{3,}$").unwrap());
    separator.is_match(line.trim())
}

/// Generic bullet or numbered lead-in followed by whitespace.
pub fn is_list_item(line: &str) -> bool {
    static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    let list_item = LIST_ITEM.get_or_init(|| Regex::new(r"^(?:[-*+]|\d+\.|[a-zA-Z]\.)\s+").unwrap());
    list_item.is_match(line.trim_start())
}

/// Display columns of leading whitespace; tabs advance to the next stop.
pub fn indent_width(raw: &str) -> usize {
    let mut columns = 0;
    for ch in raw.chars() {
        match ch {
            '\t' => columns += TAB_STOP - columns % TAB_STOP,
            c if c.is_whitespace() => columns += c.width().unwrap_or(1).max(1),
            _ => break,
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(pairs: &[(Level, PatternId)]) -> Classifier {
        let bindings = LevelBindings::try_from_iter(pairs.iter().copied()).unwrap();
        Classifier::new(MatchOrder::new(&bindings))
    }

    #[test]
    fn test_markdown_precedence_deepest_first() {
        let order = MatchOrder::new(
            &LevelBindings::try_from_iter([
                (Level::Level1, PatternId::MarkdownH1),
                (Level::Level2, PatternId::Dash),
                (Level::Level3, PatternId::MarkdownH3),
                (Level::Level4, PatternId::ChineseParen),
            ])
            .unwrap(),
        );
        let ids: Vec<_> = order.patterns().map(|(_, id)| id).collect();
        assert_eq!(
            ids,
            vec![
                PatternId::MarkdownH3,
                PatternId::MarkdownH1,
                PatternId::ChineseParen,
                PatternId::Dash,
            ]
        );
    }

    #[test]
    fn test_blank_and_separator() {
        let c = classifier(&[(Level::Level1, PatternId::Dash), (Level::Level2, PatternId::Asterisk)]);
        assert_eq!(c.classify("", false), LineKind::Blank);
        assert_eq!(c.classify("   \t", true), LineKind::Blank);
        assert_eq!(c.classify("---", false), LineKind::Separator);
        assert_eq!(c.classify("  *****  ", false), LineKind::Separator);
        assert_eq!(c.classify("-*-", false), LineKind::Separator);
        assert_ne!(c.classify("--", false), LineKind::Separator);
    }

    #[test]
    fn test_heading_beats_list_item() {
        let c = classifier(&[(Level::Level1, PatternId::Dash)]);
        assert_eq!(
            c.classify("- First", false),
            LineKind::Heading {
                level: Level::Level1,
                title: "First".to_string()
            }
        );
        assert_eq!(c.classify("* other", false), LineKind::ListItem("* other".to_string()));
    }

    #[test]
    fn test_unbound_levels_are_not_headings() {
        let c = classifier(&[]);
        assert_eq!(c.classify("# Title", false), LineKind::Prose("# Title".to_string()));
        assert_eq!(c.classify("1. step", false), LineKind::ListItem("1. step".to_string()));
    }

    #[test]
    fn test_list_items() {
        assert!(is_list_item("- a"));
        assert!(is_list_item("+ a"));
        assert!(is_list_item("12. a"));
        assert!(is_list_item("b. a"));
        assert!(is_list_item("  - nested"));
        assert!(!is_list_item("-3 degrees"));
        assert!(!is_list_item("3.5 release"));
    }

    #[test]
    fn test_continuation_needs_list_mode_and_indent() {
        let c = classifier(&[]);
        assert_eq!(
            c.classify("  more detail", true),
            LineKind::Continuation("more detail".to_string())
        );
        assert_eq!(c.classify(" one space", true), LineKind::Prose("one space".to_string()));
        assert_eq!(c.classify("  indented", false), LineKind::Prose("indented".to_string()));
        assert_eq!(c.classify("\tdetail", true), LineKind::Continuation("detail".to_string()));
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width("text"), 0);
        assert_eq!(indent_width("  text"), 2);
        assert_eq!(indent_width("\ttext"), 4);
        assert_eq!(indent_width(" \ttext"), 4);
        assert_eq!(indent_width("\u{3000}text"), 2);
    }
}
