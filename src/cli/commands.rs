use clap::{Parser, ValueEnum};
use renumd::engine::{Level, NumberStyle, PatternId};
use renumd::presets::Preset;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "renumd")]
#[command(version)]
#[command(about = "Renumber outline headings into a canonical hierarchy")]
#[command(
    long_about = "renumd - Convert outline text between heading notations.\n\n\
    Lines matching the pattern bound to a level are renumbered in that level's\n\
    output style; list items stay on their own lines and prose is joined into\n\
    single-line paragraphs. Choices are read from the saved configuration and\n\
    can be overridden per run.\n\n\
    Examples:\n  \
    renumd notes.md                          # Convert with saved choices\n  \
    renumd --preset markdown-depth README.md # Markdown # .. #### to 一、（一）1. (1)\n  \
    renumd --level1 dash --style1 roman-comma -\n  \
    renumd --preset numeric --save           # Remember a preset\n  \
    renumd --list-patterns                   # Show input notations"
)]
pub struct Cli {
    /// Text file to convert, or '-' for stdin
    ///
    /// If no file is specified and stdin is piped, input is read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Apply a preset of bindings and styles (standard, markdown, markdown-depth, numeric)
    ///
    /// Individual --levelN/--styleN flags still override the preset.
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Input pattern recognized as level 1 headings, or 'none'
    #[arg(long = "level1", value_name = "PATTERN")]
    pub level1: Option<BindingArg>,

    /// Input pattern recognized as level 2 headings, or 'none'
    #[arg(long = "level2", value_name = "PATTERN")]
    pub level2: Option<BindingArg>,

    /// Input pattern recognized as level 3 headings, or 'none'
    #[arg(long = "level3", value_name = "PATTERN")]
    pub level3: Option<BindingArg>,

    /// Input pattern recognized as level 4 headings, or 'none'
    #[arg(long = "level4", value_name = "PATTERN")]
    pub level4: Option<BindingArg>,

    /// Output style for level 1 (chinese-comma, arabic-comma, roman-comma)
    #[arg(long = "style1", value_name = "STYLE")]
    pub style1: Option<NumberStyle>,

    /// Output style for level 2 (chinese-paren, arabic-paren, letter-paren)
    #[arg(long = "style2", value_name = "STYLE")]
    pub style2: Option<NumberStyle>,

    /// Output style for level 3 (arabic-dot, letter-dot, chinese-dot)
    #[arg(long = "style3", value_name = "STYLE")]
    pub style3: Option<NumberStyle>,

    /// Output style for level 4 (arabic-paren, letter-paren, chinese-paren)
    #[arg(long = "style4", value_name = "STYLE")]
    pub style4: Option<NumberStyle>,

    /// Also strip inline markup and quote markers from body lines
    #[arg(long = "clean-body")]
    pub clean_body: bool,

    /// Output format
    ///
    ///   plain  - Converted text (default)
    ///   json   - Lines with kind, source line and changed flag
    ///   marked - Converted text with a '+ ' gutter on changed lines
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Copy the converted text to the clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Save the effective bindings and styles as the new defaults
    #[arg(long = "save")]
    pub save: bool,

    /// Ignore the saved configuration for this run
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// List the recognized input heading patterns
    #[arg(long = "list-patterns")]
    pub list_patterns: bool,

    /// List the output styles offered per level
    #[arg(long = "list-styles")]
    pub list_styles: bool,

    /// List the available presets
    #[arg(long = "list-presets")]
    pub list_presets: bool,
}

impl Cli {
    /// Per-level pattern overrides given on the command line
    pub fn binding_overrides(&self) -> impl Iterator<Item = (Level, BindingArg)> + '_ {
        Level::ALL
            .into_iter()
            .zip([self.level1, self.level2, self.level3, self.level4])
            .filter_map(|(level, arg)| arg.map(|arg| (level, arg)))
    }

    /// Per-level style overrides given on the command line
    pub fn style_overrides(&self) -> impl Iterator<Item = (Level, NumberStyle)> + '_ {
        Level::ALL
            .into_iter()
            .zip([self.style1, self.style2, self.style3, self.style4])
            .filter_map(|(level, style)| style.map(|style| (level, style)))
    }
}

/// A `--levelN` value: a pattern id or `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingArg {
    Unbound,
    Pattern(PatternId),
}

impl BindingArg {
    pub fn pattern(self) -> Option<PatternId> {
        match self {
            BindingArg::Unbound => None,
            BindingArg::Pattern(id) => Some(id),
        }
    }
}

impl FromStr for BindingArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(BindingArg::Unbound);
        }
        s.parse::<PatternId>()
            .map(BindingArg::Pattern)
            .map_err(|_| format!("unknown pattern '{s}' (see --list-patterns)"))
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Converted text
    Plain,
    /// JSON lines with metadata
    Json,
    /// Converted text with changed lines marked
    Marked,
}
