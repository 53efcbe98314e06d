//! Ready-made combinations of level bindings and output styles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::engine::{BindingError, Level, LevelBindings, NumberStyle, OutputStyles, PatternId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// Chinese official-document outline: 一、 （一） 1.  (1)
    Standard,
    /// Markdown headings, deepest first: `####` is the outermost level
    Markdown,
    /// Markdown headings by depth: `#` is the outermost level
    MarkdownDepth,
    /// Mostly numeric outline: 1、 (1) 1.  (a)
    Numeric,
}

impl Preset {
    pub fn description(self) -> &'static str {
        match self {
            Preset::Standard => "（一）/1、/-/* into 一、 （一） 1.  (1)",
            Preset::Markdown => "####/###/##/# into 一、 （一） 1.  (1)",
            Preset::MarkdownDepth => "#/##/###/#### into 一、 （一） 1.  (1)",
            Preset::Numeric => "（一）/-/*/1. into 1、 (1) 1.  (a)",
        }
    }

    pub fn inputs(self) -> [(Level, PatternId); 4] {
        use Level::*;
        use PatternId::*;
        match self {
            Preset::Standard => [
                (Level1, ChineseParen),
                (Level2, NumberDot),
                (Level3, Dash),
                (Level4, Asterisk),
            ],
            Preset::Markdown => [
                (Level1, MarkdownH4),
                (Level2, MarkdownH3),
                (Level3, MarkdownH2),
                (Level4, MarkdownH1),
            ],
            Preset::MarkdownDepth => [
                (Level1, MarkdownH1),
                (Level2, MarkdownH2),
                (Level3, MarkdownH3),
                (Level4, MarkdownH4),
            ],
            Preset::Numeric => [
                (Level1, ChineseParen),
                (Level2, Dash),
                (Level3, Asterisk),
                (Level4, NumberPeriod),
            ],
        }
    }

    pub fn outputs(self) -> [(Level, NumberStyle); 4] {
        use Level::*;
        use NumberStyle::*;
        match self {
            Preset::Standard | Preset::Markdown | Preset::MarkdownDepth => [
                (Level1, ChineseComma),
                (Level2, ChineseParen),
                (Level3, ArabicDot),
                (Level4, ArabicParen),
            ],
            Preset::Numeric => [
                (Level1, ArabicComma),
                (Level2, ArabicParen),
                (Level3, ArabicDot),
                (Level4, LetterParen),
            ],
        }
    }

    pub fn bindings(self) -> Result<LevelBindings, BindingError> {
        LevelBindings::try_from_iter(self.inputs())
    }

    pub fn styles(self) -> OutputStyles {
        OutputStyles::from_pairs(self.outputs())
    }
}
