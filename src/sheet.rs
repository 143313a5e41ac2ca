//! Tabular data sources
//!
//! The resolver reads sheets through [`SheetProvider`]; each sheet exists once
//! per language with matching row ids. [`SheetStore`] is an in-memory provider,
//! filled programmatically or from a directory of JSON exports laid out as:
//!
//! ```text
//! <data>/en/Item.json
//! <data>/ja/Item.json
//! ...
//! ```
//!
//! with each file holding `{"rows": {"<row id>": ["col 0", "col 1", ...]}}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::{Result, TranslateError};
use crate::lang::Language;

/// Read access to one language's copy of a sheet
pub trait Sheet: Send + Sync {
    /// Whether a row with this id exists
    fn has_row(&self, row: u32) -> bool;

    /// Text stored at `(row, column)`, empty when either is absent
    fn read_text_column(&self, row: u32, column: u32) -> &str;

    /// All row ids, ascending
    fn row_ids(&self) -> Vec<u32>;
}

/// Resolves `(sheet name, language)` to a sheet
pub trait SheetProvider: Sync {
    fn sheet(&self, name: &str, language: Language) -> Option<&dyn Sheet>;
}

/// Sparse in-memory sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemorySheet {
    #[serde(default)]
    rows: BTreeMap<u32, Vec<String>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a row
    pub fn insert_row<I, S>(&mut self, row: u32, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .insert(row, columns.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`MemorySheet::insert_row`]
    pub fn with_row<I, S>(mut self, row: u32, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_row(row, columns);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Sheet for MemorySheet {
    fn has_row(&self, row: u32) -> bool {
        self.rows.contains_key(&row)
    }

    fn read_text_column(&self, row: u32, column: u32) -> &str {
        self.rows
            .get(&row)
            .and_then(|cols| cols.get(column as usize))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn row_ids(&self) -> Vec<u32> {
        self.rows.keys().copied().collect()
    }
}

/// In-memory provider keyed by sheet name and language
#[derive(Debug, Default)]
pub struct SheetStore {
    sheets: AHashMap<(String, Language), MemorySheet>,
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, language: Language, sheet: MemorySheet) {
        self.sheets.insert((name.into(), language), sheet);
    }

    /// Number of `(sheet, language)` pairs held
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Load every `<lang>/<Sheet>.json` under `dir`.
    ///
    /// Subdirectories that are not language codes are ignored, as are files
    /// without a `.json` extension.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(TranslateError::FileNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut store = Self::new();
        for language in Language::ALL {
            let lang_dir = dir.join(language.code());
            if !lang_dir.is_dir() {
                tracing::debug!("No sheets for {} at {}", language.name(), lang_dir.display());
                continue;
            }

            for entry in fs::read_dir(&lang_dir)? {
                let path = entry?.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let sheet = read_sheet_file(&path)?;
                tracing::debug!(
                    "Loaded sheet {}/{} ({} rows)",
                    language.code(),
                    name,
                    sheet.len()
                );
                store.insert(name, language, sheet);
            }
        }

        tracing::info!("Loaded {} sheets from {}", store.len(), dir.display());
        Ok(store)
    }
}

fn read_sheet_file(path: &Path) -> Result<MemorySheet> {
    let content = fs::read_to_string(path).map_err(|e| TranslateError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| TranslateError::DataFormat {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl SheetProvider for SheetStore {
    fn sheet(&self, name: &str, language: Language) -> Option<&dyn Sheet> {
        self.sheets
            .get(&(name.to_string(), language))
            .map(|s| s as &dyn Sheet)
    }
}
