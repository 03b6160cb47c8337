use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.max_depth == 0 {
            errors.push("max_depth must be at least 1".to_string());
        }

        if self.search.max_tokens == 0 {
            errors.push("max_tokens must be at least 1".to_string());
        }

        if self.general.log_level.trim().is_empty() {
            errors.push("log_level must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            general: GeneralConfig {
                bookmarks_path: self.general.bookmarks_path.clone(),
                log_level: if self.general.log_level.trim().is_empty() {
                    defaults.general.log_level
                } else {
                    self.general.log_level.clone()
                },
            },
            search: SearchSettings {
                tags_only: self.search.tags_only,
                use_regex: self.search.use_regex,
                max_depth: if self.search.max_depth == 0 {
                    defaults.search.max_depth
                } else {
                    self.search.max_depth
                },
                max_tokens: if self.search.max_tokens == 0 {
                    defaults.search.max_tokens
                } else {
                    self.search.max_tokens
                },
            },
        }
    }
}

/// General application settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Bookmark export searched when no file is given on the command line.
    #[serde(default)]
    pub bookmarks_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bookmarks_path: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Query evaluation settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub tags_only: bool,
    #[serde(default)]
    pub use_regex: bool,
    /// Maximum nesting of parentheses and `NOT` before the parser flattens.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Tokens beyond this count are dropped from the query.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            tags_only: false,
            use_regex: false,
            max_depth: default_max_depth(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_max_depth() -> usize {
    32
}

fn default_max_tokens() -> usize {
    256
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
