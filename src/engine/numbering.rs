//! Hierarchical counters and the numeral notations used to render them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::levels::Level;

const CHINESE_DIGITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
const ROMAN_GLYPHS: [&str; 10] = ["Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ"];

/// Output notation for a level's numbered prefix.
///
/// The wrapping characters (and any trailing space) belong to the style; no
/// extra separator is inserted between prefix and title.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NumberStyle {
    /// `1、`
    ArabicComma,
    /// `一、`
    ChineseComma,
    /// `Ⅰ、`
    RomanComma,
    /// `（一）`
    ChineseParen,
    /// `(1)`
    ArabicParen,
    /// `(A)`, or `(a)` at level 4
    LetterParen,
    /// `1. `
    ArabicDot,
    /// `A. `
    LetterDot,
    /// `一. `
    ChineseDot,
}

impl NumberStyle {
    pub fn default_for(level: Level) -> NumberStyle {
        match level {
            Level::Level1 => NumberStyle::ChineseComma,
            Level::Level2 => NumberStyle::ChineseParen,
            Level::Level3 => NumberStyle::ArabicDot,
            Level::Level4 => NumberStyle::ArabicParen,
        }
    }

    /// The styles offered for `level`.
    pub fn choices(level: Level) -> &'static [NumberStyle] {
        use NumberStyle::*;
        match level {
            Level::Level1 => &[ChineseComma, ArabicComma, RomanComma],
            Level::Level2 => &[ChineseParen, ArabicParen, LetterParen],
            Level::Level3 => &[ArabicDot, LetterDot, ChineseDot],
            Level::Level4 => &[ArabicParen, LetterParen, ChineseParen],
        }
    }

    /// Render `ordinal` as this style's prefix at `level`.
    pub fn render(self, level: Level, ordinal: u32) -> String {
        // Letters are lowercase only at the innermost level.
        let lowercase = level == Level::Level4;
        match self {
            NumberStyle::ArabicComma => format!("{ordinal}、"),
            NumberStyle::ChineseComma => format!("{}、", chinese_numeral(ordinal)),
            NumberStyle::RomanComma => format!("{}、", roman_numeral(ordinal)),
            NumberStyle::ChineseParen => format!("（{}）", chinese_numeral(ordinal)),
            NumberStyle::ArabicParen => format!("({ordinal})"),
            NumberStyle::LetterParen => format!("({})", letter(ordinal, lowercase)),
            NumberStyle::ArabicDot => format!("{ordinal}. "),
            NumberStyle::LetterDot => format!("{}. ", letter(ordinal, false)),
            NumberStyle::ChineseDot => format!("{}. ", chinese_numeral(ordinal)),
        }
    }
}

/// Chinese numeral for 1..=99; other values fall back to Arabic digits.
pub fn chinese_numeral(n: u32) -> String {
    let digit = |d: u32| CHINESE_DIGITS[d as usize - 1];
    match n {
        1..=10 => digit(n).to_string(),
        11..=19 => format!("十{}", digit(n - 10)),
        20..=99 if n % 10 == 0 => format!("{}十", digit(n / 10)),
        20..=99 => format!("{}十{}", digit(n / 10), digit(n % 10)),
        _ => n.to_string(),
    }
}

/// Roman glyph for 1..=10, `Ⅹ` + glyph for 11..=20, and plain `Ⅹ` above.
///
/// This is an approximation kept for output compatibility; 21 and up all
/// render as `Ⅹ`.
pub fn roman_numeral(n: u32) -> String {
    match n {
        0 => n.to_string(),
        1..=10 => ROMAN_GLYPHS[n as usize - 1].to_string(),
        11..=20 => format!("{}{}", ROMAN_GLYPHS[9], ROMAN_GLYPHS[n as usize - 11]),
        _ => ROMAN_GLYPHS[9].to_string(),
    }
}

/// `A`..`Z` (or `a`..`z`) for 1..=26; Arabic digits beyond.
pub fn letter(n: u32, lowercase: bool) -> String {
    let base = if lowercase { b'a' } else { b'A' };
    match n {
        1..=26 => char::from(base + (n - 1) as u8).to_string(),
        _ => n.to_string(),
    }
}

/// Four hierarchical heading counters, all zero at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    values: [u32; 4],
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more heading at `level` and reset every deeper level.
    pub fn advance(&mut self, level: Level) -> u32 {
        let index = level.index();
        self.values[index] = self.values[index].saturating_add(1);
        for deeper in &mut self.values[index + 1..] {
            *deeper = 0;
        }
        self.values[index]
    }

    pub fn get(&self, level: Level) -> u32 {
        self.values[level.index()]
    }

    pub fn reset(&mut self) {
        self.values = [0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_numerals() {
        assert_eq!(chinese_numeral(1), "一");
        assert_eq!(chinese_numeral(10), "十");
        assert_eq!(chinese_numeral(11), "十一");
        assert_eq!(chinese_numeral(19), "十九");
        assert_eq!(chinese_numeral(20), "二十");
        assert_eq!(chinese_numeral(21), "二十一");
        assert_eq!(chinese_numeral(90), "九十");
        assert_eq!(chinese_numeral(99), "九十九");
        assert_eq!(chinese_numeral(100), "100");
        assert_eq!(chinese_numeral(0), "0");
    }

    #[test]
    fn test_roman_numerals_keep_approximation() {
        assert_eq!(roman_numeral(1), "Ⅰ");
        assert_eq!(roman_numeral(10), "Ⅹ");
        assert_eq!(roman_numeral(11), "ⅩⅠ");
        assert_eq!(roman_numeral(20), "ⅩⅩ");
        assert_eq!(roman_numeral(21), "Ⅹ");
        assert_eq!(roman_numeral(250), "Ⅹ");
    }

    #[test]
    fn test_letters() {
        assert_eq!(letter(1, false), "A");
        assert_eq!(letter(26, false), "Z");
        assert_eq!(letter(2, true), "b");
        assert_eq!(letter(27, true), "27");
    }

    #[test]
    fn test_render_styles() {
        use Level::*;
        assert_eq!(NumberStyle::ArabicComma.render(Level1, 3), "3、");
        assert_eq!(NumberStyle::ChineseComma.render(Level1, 12), "十二、");
        assert_eq!(NumberStyle::RomanComma.render(Level1, 4), "Ⅳ、");
        assert_eq!(NumberStyle::ChineseParen.render(Level2, 2), "（二）");
        assert_eq!(NumberStyle::ArabicParen.render(Level2, 7), "(7)");
        assert_eq!(NumberStyle::LetterParen.render(Level2, 3), "(C)");
        assert_eq!(NumberStyle::ArabicDot.render(Level3, 1), "1. ");
        assert_eq!(NumberStyle::LetterDot.render(Level3, 2), "B. ");
        assert_eq!(NumberStyle::ChineseDot.render(Level3, 3), "三. ");
        assert_eq!(NumberStyle::LetterParen.render(Level4, 1), "(a)");
        assert_eq!(NumberStyle::ChineseParen.render(Level4, 21), "（二十一）");
    }

    #[test]
    fn test_choices_include_default() {
        for level in Level::ALL {
            assert_eq!(NumberStyle::choices(level)[0], NumberStyle::default_for(level));
        }
    }

    #[test]
    fn test_counters_reset_deeper_levels_only() {
        let mut counters = Counters::new();
        assert_eq!(counters.advance(Level::Level1), 1);
        assert_eq!(counters.advance(Level::Level2), 1);
        assert_eq!(counters.advance(Level::Level3), 1);
        assert_eq!(counters.advance(Level::Level2), 2);
        assert_eq!(counters.get(Level::Level3), 0);
        assert_eq!(counters.advance(Level::Level4), 1);
        assert_eq!(counters.advance(Level::Level1), 2);
        assert_eq!(counters.get(Level::Level2), 0);
        assert_eq!(counters.get(Level::Level4), 0);

        // Deeper advances never touch shallower counters
        counters.advance(Level::Level4);
        assert_eq!(counters.get(Level::Level1), 2);

        counters.reset();
        assert_eq!(counters, Counters::new());
    }

    #[test]
    fn test_style_ids() {
        assert_eq!(NumberStyle::ChineseComma.to_string(), "chinese-comma");
        assert_eq!("letter-dot".parse::<NumberStyle>().unwrap(), NumberStyle::LetterDot);
    }
}
