//! # renumd
//!
//! Converts free-form outline text between heading notations (Markdown `#`
//! markers, Chinese numerals, Roman numerals, lettered or numbered
//! parentheses, dashes and asterisks) into a canonically renumbered hierarchy.
//!
//! Each of four levels is bound to an input pattern and given an output
//! style. Matching lines are renumbered with hierarchical counters and their
//! titles cleaned of old numbering and markup; list items keep their own
//! lines and other text is folded into single-line paragraphs.
//!
//! ## Example
//!
//! ```rust
//! use renumd::engine::{Level, LevelBindings, NumberStyle, OutputStyles, PatternId, convert};
//!
//! let bindings = LevelBindings::try_from_iter([
//!     (Level::Level1, PatternId::MarkdownH1),
//!     (Level::Level2, PatternId::MarkdownH2),
//! ])
//! .unwrap();
//! let styles = OutputStyles::from_pairs([(Level::Level2, NumberStyle::ArabicParen)]);
//!
//! let text = "# Goals\n## **Reach**\n## 3. Quality\n# Risks";
//! assert_eq!(
//!     convert(text, &bindings, &styles),
//!     "一、Goals\n(1)Reach\n(2)Quality\n二、Risks"
//! );
//! ```

/// Configuration module for persisting level choices.
///
/// Stores the last-chosen input pattern and output style per level as TOML.
pub mod config;

/// Conversion engine: patterns, classification, title cleanup, numbering
/// and document assembly.
pub mod engine;

/// Input handling for files and stdin.
pub mod input;

/// Named combinations of bindings and styles.
pub mod presets;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::{Conversion, Converter, convert};
