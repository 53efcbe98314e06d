//! The outline conversion engine.
//!
//! Lines are classified against the bound heading patterns, headings are
//! renumbered with fresh per-call counters and cleaned titles, and everything
//! else is folded into list items and single-line paragraphs.
//!
//! ```
//! use renumd::engine::{Level, LevelBindings, OutputStyles, PatternId, convert};
//!
//! let bindings = LevelBindings::try_from_iter([(Level::Level1, PatternId::Dash)]).unwrap();
//! let out = convert("- First\n- Second", &bindings, &OutputStyles::new());
//! assert_eq!(out, "一、First\n二、Second");
//! ```

pub mod assemble;
pub mod classify;
pub mod levels;
pub mod numbering;
pub mod patterns;
pub mod sanitize;

pub use assemble::{OutputKind, OutputLine};
pub use classify::{Classifier, LineKind, MatchOrder};
pub use levels::{BindingError, Level, LevelBindings, OutputStyles};
pub use numbering::{Counters, NumberStyle};
pub use patterns::{HeadingPattern, PatternId};

use assemble::Assembler;
use sanitize::{clean_body_text, sanitize_title};
use serde::{Deserialize, Serialize};

/// Knobs that do not affect heading recognition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Strip inline markup and blockquote markers from body lines too.
    #[serde(default)]
    pub clean_body: bool,
}

/// Result of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub lines: Vec<OutputLine>,
}

impl Conversion {
    /// The converted document, newline-joined without a trailing newline.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indices of output lines that differ from their source.
    pub fn changed_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.changed)
            .map(|(index, _)| index)
    }

    pub fn heading_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line.kind, OutputKind::Heading { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A configured converter.
///
/// Holds no per-document state: every [`Converter::convert`] call starts
/// from zeroed counters, so one converter can be reused and shared.
#[derive(Debug, Clone)]
pub struct Converter {
    classifier: Classifier,
    styles: OutputStyles,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(bindings: &LevelBindings, styles: &OutputStyles) -> Self {
        Self {
            classifier: Classifier::new(MatchOrder::new(bindings)),
            styles: styles.clone(),
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn match_order(&self) -> &MatchOrder {
        self.classifier.order()
    }

    pub fn convert(&self, text: &str) -> Conversion {
        let mut counters = Counters::new();
        let mut assembler = Assembler::new();

        for (index, raw) in text.lines().enumerate() {
            let source_line = index + 1;
            match self.classifier.classify(raw, assembler.in_list()) {
                LineKind::Blank | LineKind::Separator => assembler.boundary(),
                LineKind::Heading { level, title } => {
                    let ordinal = counters.advance(level);
                    let prefix = self.styles.get(level).render(level, ordinal);
                    let rendered = format!("{}{}", prefix, sanitize_title(&title));
                    let changed = rendered != raw.trim();
                    assembler.heading(rendered, level, ordinal, source_line, changed);
                }
                LineKind::ListItem(text) => {
                    let (text, changed) = self.body(text);
                    assembler.list_item(text, source_line, changed);
                }
                LineKind::Continuation(text) => {
                    let (text, _) = self.body(text);
                    assembler.continuation(text, source_line);
                }
                LineKind::Prose(text) => {
                    let (text, changed) = self.body(text);
                    assembler.prose(text, source_line, changed);
                }
            }
        }

        let conversion = Conversion {
            lines: assembler.finish(),
        };
        log::debug!(
            "converted {} input lines into {} output lines ({} headings)",
            text.lines().count(),
            conversion.lines.len(),
            conversion.heading_count()
        );
        conversion
    }

    fn body(&self, text: String) -> (String, bool) {
        if !self.options.clean_body {
            return (text, false);
        }
        let cleaned = clean_body_text(&text);
        let changed = cleaned != text;
        (cleaned, changed)
    }
}

/// Convert `text` with the given bindings and styles.
pub fn convert(text: &str, bindings: &LevelBindings, styles: &OutputStyles) -> String {
    Converter::new(bindings, styles).convert(text).text()
}
