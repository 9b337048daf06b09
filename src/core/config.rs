use serde::Deserialize;
use std::path::Path;

const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Settings for the runic32 command-line tool.
///
/// The codec itself has nothing to configure; these only affect how the
/// wrapping application reads input and writes output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
    /// Print a newline after encoded output
    pub trailing_newline: bool,
    /// Remove `\n` and `\r` from encoded input before decoding
    pub strip_line_endings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_size: DEFAULT_MAX_SIZE,
            trailing_newline: true,
            strip_line_endings: true,
        }
    }
}

/// A settings layer as read from TOML. Absent keys leave lower layers alone.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
struct SettingsLayer {
    #[serde(default)]
    max_size: Option<usize>,
    #[serde(default)]
    trailing_newline: Option<bool>,
    #[serde(default)]
    strip_line_endings: Option<bool>,
}

/// Configuration file contents.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigFile {
    #[serde(default)]
    settings: SettingsLayer,
}

/// Layered runic32 configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Effective settings after all layers were merged
    pub settings: Settings,
}

impl Config {
    /// Parses configuration from TOML content, on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config = Config::default();
        config.merge(toml::from_str(content)?);
        Ok(config)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../runic32.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Reads a single configuration file without merging it anywhere.
    pub fn read_file(path: &Path) -> Result<ConfigFile, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads configuration from a custom file path, on top of the built-in defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;
        config.merge(Self::read_file(path)?);
        Ok(config)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/runic32/config.toml` (user overrides)
    /// 3. `./runic32.toml` (project-local overrides)
    ///
    /// Unreadable override files produce a warning on stderr unless `quiet`
    /// is set, and are otherwise skipped.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("runic32").join("config.toml");
            config.merge_optional(&user_config_path, "user", quiet);
        }

        config.merge_optional(Path::new("runic32.toml"), "local", quiet);

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, label: &str, quiet: bool) {
        if !path.exists() {
            return;
        }
        match Self::read_file(path) {
            Ok(file) => self.merge(file),
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "Warning: Failed to load {} config from {:?}: {}",
                        label, path, e
                    );
                }
            }
        }
    }

    /// Merges a configuration file into this one.
    ///
    /// Keys present in `other` replace the current values.
    pub fn merge(&mut self, other: ConfigFile) {
        let layer = other.settings;
        if let Some(max_size) = layer.max_size {
            self.settings.max_size = max_size;
        }
        if let Some(trailing_newline) = layer.trailing_newline {
            self.settings.trailing_newline = trailing_newline;
        }
        if let Some(strip) = layer.strip_line_endings {
            self.settings.strip_line_endings = strip;
        }
    }
}
