//! Heading levels and the per-call level → pattern / level → style tables.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use super::numbering::NumberStyle;
use super::patterns::PatternId;

/// One of the four nesting depths of the renumbered outline.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl Level {
    /// All levels, outermost first.
    pub const ALL: [Level; 4] = [Level::Level1, Level::Level2, Level::Level3, Level::Level4];

    /// 1-based level number.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based index into per-level tables.
    pub fn index(self) -> usize {
        match self {
            Level::Level1 => 0,
            Level::Level2 => 1,
            Level::Level3 => 2,
            Level::Level4 => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Level> {
        match number {
            1 => Some(Level::Level1),
            2 => Some(Level::Level2),
            3 => Some(Level::Level3),
            4 => Some(Level::Level4),
            _ => None,
        }
    }
}

/// Rejected level binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("pattern `{0}` matches every line and cannot be bound to a level")]
    CatchAll(PatternId),

    #[error("pattern `{pattern}` is already bound to {bound}; cannot also bind it to {requested}")]
    DuplicatePattern {
        pattern: PatternId,
        bound: Level,
        requested: Level,
    },
}

/// Which input heading notation is recognized at each level.
///
/// A level without a pattern is never treated as a heading. A pattern can be
/// bound to at most one level at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBindings {
    slots: [Option<PatternId>; 4],
}

impl LevelBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate bindings from `(level, pattern)` pairs.
    pub fn try_from_iter<I>(pairs: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = (Level, PatternId)>,
    {
        let mut bindings = Self::new();
        for (level, pattern) in pairs {
            bindings.bind(level, pattern)?;
        }
        Ok(bindings)
    }

    /// Bind `pattern` to `level`, replacing whatever the level had before.
    pub fn bind(&mut self, level: Level, pattern: PatternId) -> Result<(), BindingError> {
        if pattern.is_catch_all() {
            return Err(BindingError::CatchAll(pattern));
        }
        if let Some(bound) = self.level_of(pattern).filter(|bound| *bound != level) {
            return Err(BindingError::DuplicatePattern {
                pattern,
                bound,
                requested: level,
            });
        }
        self.slots[level.index()] = Some(pattern);
        Ok(())
    }

    pub fn unbind(&mut self, level: Level) -> Option<PatternId> {
        self.slots[level.index()].take()
    }

    pub fn get(&self, level: Level) -> Option<PatternId> {
        self.slots[level.index()]
    }

    /// Level a pattern is currently bound to, if any.
    pub fn level_of(&self, pattern: PatternId) -> Option<Level> {
        self.iter()
            .find(|(_, bound)| *bound == pattern)
            .map(|(level, _)| level)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Bound levels, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, PatternId)> + '_ {
        Level::ALL
            .into_iter()
            .filter_map(|level| self.get(level).map(|pattern| (level, pattern)))
    }
}

/// Output notation chosen for each level.
///
/// Levels without an explicit choice use [`NumberStyle::default_for`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputStyles {
    slots: [Option<NumberStyle>; 4],
}

impl OutputStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Level, NumberStyle)>,
    {
        let mut styles = Self::new();
        for (level, style) in pairs {
            styles.set(level, style);
        }
        styles
    }

    pub fn set(&mut self, level: Level, style: NumberStyle) {
        self.slots[level.index()] = Some(style);
    }

    pub fn clear(&mut self, level: Level) {
        self.slots[level.index()] = None;
    }

    /// Style for `level`, falling back to the level's default.
    pub fn get(&self, level: Level) -> NumberStyle {
        self.slots[level.index()].unwrap_or_else(|| NumberStyle::default_for(level))
    }

    /// Explicitly chosen style, without the fallback.
    pub fn explicit(&self, level: Level) -> Option<NumberStyle> {
        self.slots[level.index()]
    }
}
