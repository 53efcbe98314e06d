use crate::engine::{
    BindingError, ConvertOptions, Level, LevelBindings, NumberStyle, OutputStyles, PatternId,
};
use crate::presets::Preset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },
}

/// Last-chosen heading bindings and output styles, keyed by level name.
///
/// A level missing from `input` is unbound; a level missing from `output`
/// uses its default style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: BTreeMap<Level, PatternId>,

    #[serde(default = "default_output")]
    pub output: BTreeMap<Level, NumberStyle>,

    #[serde(default)]
    pub convert: ConvertOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            convert: ConvertOptions::default(),
        }
    }
}

fn default_input() -> BTreeMap<Level, PatternId> {
    BTreeMap::from([
        (Level::Level1, PatternId::ChineseParen),
        (Level::Level2, PatternId::Dash),
        (Level::Level3, PatternId::Asterisk),
        (Level::Level4, PatternId::NumberPeriod),
    ])
}

fn default_output() -> BTreeMap<Level, NumberStyle> {
    Level::ALL
        .into_iter()
        .map(|level| (level, NumberStyle::default_for(level)))
        .collect()
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/renumd/config.toml
    /// - Linux: ~/.config/renumd/config.toml
    /// - Windows: %APPDATA%/renumd/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("renumd").join("config.toml"))
    }

    /// Load config from file, or return default if it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load config from `path`; `Ok(None)` if the file does not exist
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded configuration from {}", config_path.display());
        Ok(Some(config))
    }

    /// Save config to the platform config path, returning where it went
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Atomically write config to `path` (temp file, then rename)
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let config_path = path.as_ref();
        let write_err = |source: std::io::Error| ConfigError::Write {
            config_path: config_path.to_path_buf(),
            source,
        };

        let parent_dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(write_err)?;

        let contents = toml::to_string_pretty(self)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir).map_err(write_err)?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(write_err)?;
        temp_file.flush().map_err(write_err)?;
        temp_file
            .persist(config_path)
            .map_err(|e| write_err(e.error))?;

        log::debug!("saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validated level bindings
    pub fn bindings(&self) -> Result<LevelBindings, BindingError> {
        LevelBindings::try_from_iter(self.input.iter().map(|(level, id)| (*level, *id)))
    }

    pub fn styles(&self) -> OutputStyles {
        OutputStyles::from_pairs(self.output.iter().map(|(level, style)| (*level, *style)))
    }

    /// Bind (or with `None`, unbind) the input pattern of a level
    pub fn set_input(&mut self, level: Level, pattern: Option<PatternId>) {
        match pattern {
            Some(pattern) => self.input.insert(level, pattern),
            None => self.input.remove(&level),
        };
    }

    pub fn set_output(&mut self, level: Level, style: NumberStyle) {
        self.output.insert(level, style);
    }

    /// Replace all bindings and styles with a preset's
    pub fn apply_preset(&mut self, preset: Preset) {
        self.input = preset.inputs().into_iter().collect();
        self.output = preset.outputs().into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        let bindings = config.bindings().unwrap();
        assert_eq!(bindings.get(Level::Level1), Some(PatternId::ChineseParen));
        assert_eq!(bindings.get(Level::Level4), Some(PatternId::NumberPeriod));
        assert_eq!(config.styles(), OutputStyles::from_pairs(default_output()));
        assert!(!config.convert.clean_body);
    }

    #[test]
    fn test_toml_keyed_by_level_name() {
        let mut config = Config::default();
        config.set_input(Level::Level3, None);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("level1 = \"chinese-paren\""));
        assert!(toml_str.contains("level4 = \"arabic-paren\""));
        assert!(!toml_str.contains("asterisk"));

        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.bindings().unwrap().get(Level::Level3), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[input]\nlevel1 = \"markdown-h1\"\n").unwrap();
        assert_eq!(config.input.len(), 1);
        assert_eq!(config.output, default_output());

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_duplicate_binding_surfaces_error() {
        let config: Config =
            toml::from_str("[input]\nlevel1 = \"dash\"\nlevel2 = \"dash\"\n").unwrap();
        assert!(matches!(
            config.bindings(),
            Err(BindingError::DuplicatePattern { .. })
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.apply_preset(Preset::Numeric);
        config.convert.clean_body = true;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_path(dir.path().join("absent.toml")).unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input]\nlevel1 = \"no-such-pattern\"\n").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
