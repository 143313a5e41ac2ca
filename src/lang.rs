//! Supported text languages
//!
//! The language set is closed: every resolved entry carries text for all of
//! these, in this order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};

/// Supported text languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// All languages in canonical order
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Japanese,
        Language::German,
        Language::French,
    ];

    /// Parse a language from its two-letter code
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "ja" => Ok(Self::Japanese),
            "de" => Ok(Self::German),
            "fr" => Ok(Self::French),
            _ => Err(TranslateError::UnknownLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Two-letter code, also used as the field name in output
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::German => "de",
            Self::French => "fr",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Japanese => "Japanese",
            Self::German => "German",
            Self::French => "French",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
