//! Engine configuration
//!
//! Read from `config.toml` under [`config_base_dir`](crate::fs_utils::config_base_dir)
//! unless a path is given explicitly. A missing file means defaults.
//!
//! ```toml
//! [languages]
//! order = ["en", "ja", "de", "fr"]
//! base = "en"
//! fallback_to_base = true
//!
//! [lookup]
//! placeholders = ["@"]
//!
//! [resolve]
//! parallel = false
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};
use crate::fs_utils;
use crate::lang::Language;
use crate::resolve::ResolveOptions;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub languages: LanguageConfig,

    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Languages every entry must carry, in output order
    #[serde(default = "default_order")]
    pub order: Vec<Language>,

    /// Language whose sheets decide which rows exist
    #[serde(default = "default_base")]
    pub base: Language,

    /// Use base-language text where a completion has none of its own
    #[serde(default = "default_true")]
    pub fallback_to_base: bool,
}

fn default_order() -> Vec<Language> {
    Language::ALL.to_vec()
}

fn default_base() -> Language {
    Language::English
}

fn default_true() -> bool {
    true
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            base: default_base(),
            fallback_to_base: true,
        }
    }
}

/// Lookup column handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Lookup values meaning "use the completion's own text"
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
}

fn default_placeholders() -> Vec<String> {
    vec!["@".to_string()]
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            placeholders: default_placeholders(),
        }
    }
}

/// Resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolveConfig {
    /// Resolve records on all cores
    #[serde(default)]
    pub parallel: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        fs_utils::config_base_dir().join("config.toml")
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::default_path()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| TranslateError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| TranslateError::ConfigError {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| TranslateError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;
        fs_utils::write_atomic(path, &content)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(invalid_log_level(&self.logging.level));
        }
        self.resolve_options().validate()
    }

    /// Options for the resolution engine
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            languages: self.languages.order.clone(),
            base_language: self.languages.base,
            placeholder_tokens: self.lookup.placeholders.clone(),
            parallel: self.resolve.parallel,
            fallback_to_base: self.languages.fallback_to_base,
        }
    }

    /// All keys accepted by [`EngineConfig::get`] and [`EngineConfig::set`]
    pub fn keys() -> &'static [&'static str] {
        &[
            "languages.order",
            "languages.base",
            "languages.fallback_to_base",
            "lookup.placeholders",
            "resolve.parallel",
            "logging.level",
        ]
    }

    /// Get a configuration value by key path (e.g., "languages.base")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["languages", "order"] => Some(
                self.languages
                    .order
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            ["languages", "base"] => Some(self.languages.base.code().to_string()),
            ["languages", "fallback_to_base"] => Some(self.languages.fallback_to_base.to_string()),
            ["lookup", "placeholders"] => Some(self.lookup.placeholders.join(",")),
            ["resolve", "parallel"] => Some(self.resolve.parallel.to_string()),
            ["logging", "level"] => Some(self.logging.level.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path.
    ///
    /// List values are comma-separated. The config is left unchanged if the
    /// new value would make it invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["languages", "order"] => {
                updated.languages.order = value
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(Language::from_code)
                    .collect::<Result<Vec<_>>>()?;
            }
            ["languages", "base"] => {
                updated.languages.base = Language::from_code(value)?;
            }
            ["languages", "fallback_to_base"] => {
                updated.languages.fallback_to_base = parse_bool(key, value)?;
            }
            ["lookup", "placeholders"] => {
                updated.lookup.placeholders = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            ["resolve", "parallel"] => {
                updated.resolve.parallel = parse_bool(key, value)?;
            }
            ["logging", "level"] => {
                if !LOG_LEVELS.contains(&value) {
                    return Err(invalid_log_level(value));
                }
                updated.logging.level = value.to_string();
            }
            _ => {
                return Err(TranslateError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(TranslateError::ConfigError {
            message: format!("Invalid boolean for {}: {}", key, value),
        }),
    }
}

fn invalid_log_level(level: &str) -> TranslateError {
    TranslateError::ConfigError {
        message: format!(
            "Invalid log level: {}. Must be one of: {}",
            level,
            LOG_LEVELS.join(", ")
        ),
    }
}
