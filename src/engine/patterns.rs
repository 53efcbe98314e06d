//! Catalogue of recognized input heading notations.
//!
//! Every entry is an anchored whole-line rule. Rules whose marker is an ASCII
//! character that also shows up in prose (`#`, `-`, `*`, `.`) require
//! whitespace before the title, so `-3` or `3.5 release` are not headings.
//! After closing brackets and the ideographic comma the whitespace is optional.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of a registered heading pattern.
///
/// Variants are declared in registry order, which is also the secondary
/// match precedence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PatternId {
    MarkdownH4,
    MarkdownH3,
    MarkdownH2,
    MarkdownH1,
    ChineseParen,
    ChineseDot,
    NumberParen,
    NumberDot,
    NumberPeriod,
    LetterParen,
    LetterPeriod,
    LetterParenLower,
    Dash,
    Asterisk,
    RomanParen,
    RomanDot,
    PlainText,
}

impl PatternId {
    /// Number of leading hashes for Markdown heading rules.
    pub fn hash_depth(self) -> Option<usize> {
        match self {
            PatternId::MarkdownH1 => Some(1),
            PatternId::MarkdownH2 => Some(2),
            PatternId::MarkdownH3 => Some(3),
            PatternId::MarkdownH4 => Some(4),
            _ => None,
        }
    }

    /// The catch-all rule matches every non-empty line.
    pub fn is_catch_all(self) -> bool {
        self == PatternId::PlainText
    }

    /// Patterns that may be offered as level bindings.
    pub fn selectable() -> impl Iterator<Item = PatternId> {
        PatternId::iter().filter(|id| !id.is_catch_all())
    }

    pub fn pattern(self) -> &'static HeadingPattern {
        &registry()[self as usize]
    }
}

/// How the title is pulled out of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Single group holding the title.
    Title,
    /// Legacy marker in group 1, title in group 2.
    MarkerAndTitle,
}

impl Capture {
    pub fn arity(self) -> usize {
        match self {
            Capture::Title => 1,
            Capture::MarkerAndTitle => 2,
        }
    }
}

/// A registered heading notation.
#[derive(Debug)]
pub struct HeadingPattern {
    pub id: PatternId,
    /// Short human label, e.g. `"（一）Title"`.
    pub label: &'static str,
    pub capture: Capture,
    /// Lines this pattern is expected to match.
    pub samples: [&'static str; 2],
    regex: Regex,
}

impl HeadingPattern {
    fn new(
        id: PatternId,
        label: &'static str,
        source: &str,
        capture: Capture,
        samples: [&'static str; 2],
    ) -> Self {
        Self {
            id,
            label,
            capture,
            samples,
            regex: Regex::new(source).unwrap(),
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Title text captured from `line`, if the whole line matches.
    pub fn capture_title<'t>(&self, line: &'t str) -> Option<&'t str> {
        let caps = self.regex.captures(line)?;
        caps.get(self.capture.arity()).map(|m| m.as_str().trim())
    }

    /// Legacy marker captured from `line` for two-group rules.
    pub fn capture_marker<'t>(&self, line: &'t str) -> Option<&'t str> {
        match self.capture {
            Capture::Title => None,
            Capture::MarkerAndTitle => self
                .regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        }
    }
}

/// All registered patterns, indexed by `PatternId as usize`.
pub fn registry() -> &'static [HeadingPattern] {
    use Capture::{MarkerAndTitle, Title};
    use PatternId::*;

    static REGISTRY: OnceLock<Vec<HeadingPattern>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            HeadingPattern::new(
                MarkdownH4,
                "#### Title",
                r"^####\s+(.+)$",
                Title,
                ["#### Scope", "#### 范围"],
            ),
            HeadingPattern::new(
                MarkdownH3,
                "### Title",
                r"^###\s+(.+)$",
                Title,
                ["### Scope", "### 范围"],
            ),
            HeadingPattern::new(
                MarkdownH2,
                "## Title",
                r"^##\s+(.+)$",
                Title,
                ["## Scope", "## 范围"],
            ),
            HeadingPattern::new(MarkdownH1, "# Title", r"^#\s+(.+)$", Title, ["# Scope", "# 范围"]),
            HeadingPattern::new(
                ChineseParen,
                "（一）Title",
                r"^（([一二三四五六七八九十]+)）\s*(.+)$",
                MarkerAndTitle,
                ["（一）项目概述", "（十二） Scope"],
            ),
            HeadingPattern::new(
                ChineseDot,
                "一、Title",
                r"^([一二三四五六七八九十]+)、\s*(.+)$",
                MarkerAndTitle,
                ["一、项目概述", "二十、 Scope"],
            ),
            HeadingPattern::new(
                NumberParen,
                "(1)Title",
                r"^\((\d+)\)\s*(.+)$",
                MarkerAndTitle,
                ["(1)组建专家团队", "(12) Scope"],
            ),
            HeadingPattern::new(
                NumberDot,
                "1、Title",
                r"^(\d+)、\s*(.+)$",
                MarkerAndTitle,
                ["1、主要内容", "12、 Scope"],
            ),
            HeadingPattern::new(
                NumberPeriod,
                "1. Title",
                r"^(\d+)\.\s+(.+)$",
                MarkerAndTitle,
                ["1. 工业诊所项目", "12. Scope"],
            ),
            HeadingPattern::new(
                LetterParen,
                "(A)Title",
                r"^\(([A-Z])\)\s*(.+)$",
                MarkerAndTitle,
                ["(A)专项行动", "(B) Scope"],
            ),
            HeadingPattern::new(
                LetterPeriod,
                "A. Title",
                r"^([A-Z])\.\s+(.+)$",
                MarkerAndTitle,
                ["A. 工业诊所项目", "B. Scope"],
            ),
            HeadingPattern::new(
                LetterParenLower,
                "(a)Title",
                r"^\(([a-z])\)\s*(.+)$",
                MarkerAndTitle,
                ["(a)组建专家团队", "(b) Scope"],
            ),
            HeadingPattern::new(Dash, "- Title", r"^-\s+(.+)$", Title, ["- 重点工作", "- Scope"]),
            HeadingPattern::new(Asterisk, "* Title", r"^\*\s+(.+)$", Title, ["* 详细说明", "* Scope"]),
            HeadingPattern::new(
                RomanParen,
                "（Ⅰ）Title",
                r"^（([ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ]+)）\s*(.+)$",
                MarkerAndTitle,
                ["（Ⅰ）项目概述", "（ⅩⅡ） Scope"],
            ),
            HeadingPattern::new(
                RomanDot,
                "Ⅰ、Title",
                r"^([ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ]+)、\s*(.+)$",
                MarkerAndTitle,
                ["Ⅰ、项目概述", "Ⅱ、 Scope"],
            ),
            HeadingPattern::new(PlainText, "any line", r"^(.+)$", Title, ["Scope", "范围"]),
        ]
    })
}
