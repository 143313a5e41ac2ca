//! Completion records
//!
//! A completion is one auto-translate entry keyed by `(group, row_id)`. Its
//! lookup column either references a sheet (resolved through the selector) or
//! is a placeholder, in which case the record's own text is used.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};
use crate::lang::Language;

/// Reads the text of "the field itself" for a language, without any lookup.
pub trait DirectText {
    fn text(&self, language: Language) -> Option<Cow<'_, str>>;
}

impl<F> DirectText for F
where
    F: Fn(Language) -> Option<String>,
{
    fn text(&self, language: Language) -> Option<Cow<'_, str>> {
        self(language).map(Cow::Owned)
    }
}

/// One completion row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub group: u32,
    pub row_id: u32,
    /// Raw lookup reference, e.g. `Item[1-3,col-2]`, empty or `@` for none
    #[serde(default)]
    pub lookup_table: String,
    /// Per-language text of the completion row itself
    #[serde(default)]
    pub text: BTreeMap<Language, String>,
}

impl CompletionRecord {
    pub fn new(group: u32, row_id: u32, lookup_table: impl Into<String>) -> Self {
        Self {
            group,
            row_id,
            lookup_table: lookup_table.into(),
            text: BTreeMap::new(),
        }
    }

    /// Builder: set the record's own text for one language
    pub fn with_text(mut self, language: Language, text: impl Into<String>) -> Self {
        self.text.insert(language, text.into());
        self
    }
}

impl DirectText for CompletionRecord {
    fn text(&self, language: Language) -> Option<Cow<'_, str>> {
        self.text.get(&language).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Load completion records from a JSON array file
pub fn load_completions(path: &Path) -> Result<Vec<CompletionRecord>> {
    if !path.exists() {
        return Err(TranslateError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| TranslateError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let records: Vec<CompletionRecord> =
        serde_json::from_str(&content).map_err(|e| TranslateError::DataFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::info!("Loaded {} completion records from {}", records.len(), path.display());
    Ok(records)
}
