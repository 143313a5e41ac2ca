//! Resolution engine
//!
//! Turns completion records into `(group, row) -> LocalisedText` entries.
//!
//! Each record is resolved on its own by [`resolve_record`], a pure function of
//! the record, the sheet provider and the options. [`Resolver`] then merges the
//! per-record results into a [`ResolvedTable`], rejecting any record whose keys
//! were already emitted. [`resolve_all`] drives both steps, optionally resolving
//! records on the rayon pool; merging always happens in input order, so the
//! parallel and sequential runs produce the same table.

use std::ops::RangeInclusive;

use ahash::AHashMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::completion::{CompletionRecord, DirectText};
use crate::error::{ResolveError, Result, TranslateError};
use crate::lang::Language;
use crate::localised::LocalisedText;
use crate::selector::{self, SelectorPart};
use crate::sheet::{Sheet, SheetProvider};
use crate::text::{is_placeholder, normalize, normalize_lookup};

/// Output key: `(group, row)`
pub type EntryKey = (u32, u32);

/// Settings for a resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Languages every entry must carry, in output order
    pub languages: Vec<Language>,
    /// Language whose sheets decide which rows exist
    pub base_language: Language,
    /// Lookup values meaning "no table reference"
    pub placeholder_tokens: Vec<String>,
    /// Resolve records on the rayon pool
    pub parallel: bool,
    /// Direct text: use the base-language text for a language the record has no text for
    pub fallback_to_base: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            base_language: Language::English,
            placeholder_tokens: vec!["@".to_string()],
            parallel: false,
            fallback_to_base: true,
        }
    }
}

impl ResolveOptions {
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(TranslateError::ConfigError {
                message: "at least one language must be configured".to_string(),
            });
        }
        for (i, language) in self.languages.iter().enumerate() {
            if self.languages[..i].contains(language) {
                return Err(TranslateError::ConfigError {
                    message: format!("language {} is listed twice", language),
                });
            }
        }
        if !self.languages.contains(&self.base_language) {
            return Err(TranslateError::ConfigError {
                message: format!(
                    "base language {} is not one of the configured languages",
                    self.base_language
                ),
            });
        }
        Ok(())
    }
}

/// One emitted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub group: u32,
    pub row: u32,
    pub text: LocalisedText,
}

impl ResolvedEntry {
    pub fn key(&self) -> EntryKey {
        (self.group, self.row)
    }
}

/// Which rows a selector reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFilter {
    /// Every row of the base-language sheet
    All,
    /// Rows inside any of these inclusive ranges
    Ranges(Vec<RangeInclusive<u32>>),
}

impl RowFilter {
    pub fn contains(&self, row: u32) -> bool {
        match self {
            Self::All => true,
            Self::Ranges(ranges) => ranges.iter().any(|r| r.contains(&row)),
        }
    }
}

/// Rows and columns to read for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPlan {
    pub rows: RowFilter,
    /// Columns in priority order; the first non-empty one wins
    pub columns: Vec<u32>,
}

impl LookupPlan {
    pub fn from_parts(parts: &[SelectorPart]) -> Self {
        let mut ranges = Vec::new();
        let mut columns = Vec::new();

        for part in parts {
            match *part {
                SelectorPart::IndexRange { start, end } => ranges.push(start..=end),
                SelectorPart::SingleRow { row } => ranges.push(row..=row),
                SelectorPart::ColumnSpecifier { column } => columns.push(column),
                SelectorPart::NounMarker => {}
            }
        }

        if columns.is_empty() {
            columns.push(0);
        }

        // A reversed range still counts as a row selection; it just matches nothing.
        let rows = if ranges.is_empty() {
            RowFilter::All
        } else {
            RowFilter::Ranges(ranges)
        };

        Self { rows, columns }
    }
}

/// How a record was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Direct,
    Lookup,
}

/// Result of resolving one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub kind: RecordKind,
    pub entries: Vec<ResolvedEntry>,
    /// Candidate rows dropped for lacking text in some language
    pub dropped_rows: usize,
}

/// Resolve one completion record.
pub fn resolve_record(
    record: &CompletionRecord,
    provider: &dyn SheetProvider,
    options: &ResolveOptions,
) -> std::result::Result<RecordOutcome, ResolveError> {
    resolve_lookup(
        record.group,
        record.row_id,
        &record.lookup_table,
        record,
        provider,
        options,
    )
}

/// Resolve a lookup reference for the record keyed `(group, row_id)`.
///
/// Placeholder references and bare sheet names without a bracket read
/// `direct` instead of any sheet.
pub fn resolve_lookup(
    group: u32,
    row_id: u32,
    lookup: &str,
    direct: &dyn DirectText,
    provider: &dyn SheetProvider,
    options: &ResolveOptions,
) -> std::result::Result<RecordOutcome, ResolveError> {
    let lookup = normalize_lookup(lookup);
    if is_placeholder(&lookup, &options.placeholder_tokens) {
        return Ok(direct_outcome(group, row_id, direct, options));
    }

    let selector = selector::parse(&lookup)?;
    if !selector.has_selector() {
        return Ok(direct_outcome(group, row_id, direct, options));
    }
    let plan = LookupPlan::from_parts(selector.parts());

    let mut sheets: Vec<(Language, &dyn Sheet)> = Vec::with_capacity(options.languages.len());
    for &language in &options.languages {
        let sheet = provider
            .sheet(&selector.sheet, language)
            .ok_or_else(|| ResolveError::MissingSheet {
                sheet: selector.sheet.clone(),
                language: language.code().to_string(),
            })?;
        sheets.push((language, sheet));
    }
    let base = provider
        .sheet(&selector.sheet, options.base_language)
        .ok_or_else(|| ResolveError::MissingSheet {
            sheet: selector.sheet.clone(),
            language: options.base_language.code().to_string(),
        })?;

    let mut entries = Vec::new();
    let mut dropped_rows = 0;
    for row in base.row_ids().into_iter().filter(|r| plan.rows.contains(*r)) {
        match resolve_row(row, &sheets, &plan.columns) {
            Some(text) => entries.push(ResolvedEntry { group, row, text }),
            None => {
                dropped_rows += 1;
                tracing::debug!(
                    "[RESOLVE] {} row {} lacks text in some language, skipped",
                    selector.sheet,
                    row
                );
            }
        }
    }

    Ok(RecordOutcome {
        kind: RecordKind::Lookup,
        entries,
        dropped_rows,
    })
}

/// Text for one row in every language, or `None` if any language has none.
fn resolve_row(
    row: u32,
    sheets: &[(Language, &dyn Sheet)],
    columns: &[u32],
) -> Option<LocalisedText> {
    LocalisedText::collect(sheets.iter().map(|(language, sheet)| {
        let text = columns
            .iter()
            .map(|&column| normalize(sheet.read_text_column(row, column)))
            .find(|text| !text.is_empty());
        (*language, text)
    }))
}

/// Single entry keyed by the record itself, read from its direct text.
fn direct_outcome(
    group: u32,
    row_id: u32,
    direct: &dyn DirectText,
    options: &ResolveOptions,
) -> RecordOutcome {
    let text = resolve_direct(direct, options);
    if text.is_none() {
        tracing::debug!("[RESOLVE] ({}, {}) has incomplete direct text", group, row_id);
    }
    RecordOutcome {
        kind: RecordKind::Direct,
        dropped_rows: usize::from(text.is_none()),
        entries: text
            .map(|text| ResolvedEntry {
                group,
                row: row_id,
                text,
            })
            .into_iter()
            .collect(),
    }
}

fn resolve_direct(direct: &dyn DirectText, options: &ResolveOptions) -> Option<LocalisedText> {
    let base = direct
        .text(options.base_language)
        .map(|t| normalize(&t))
        .filter(|t| !t.is_empty())?;

    LocalisedText::collect(options.languages.iter().map(|&language| {
        let text = match direct.text(language) {
            Some(text) => Some(normalize(&text)),
            None if options.fallback_to_base => Some(base.clone()),
            None => None,
        };
        (language, text)
    }))
}

/// Accumulated output, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTable {
    entries: Vec<ResolvedEntry>,
    index: AHashMap<EntryKey, usize>,
}

impl ResolvedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record's entries, all or nothing.
    ///
    /// Fails with [`ResolveError::DuplicateKey`] if any key is already present
    /// or repeats within `entries`; the table is left untouched in that case.
    pub fn insert_all(
        &mut self,
        entries: Vec<ResolvedEntry>,
    ) -> std::result::Result<usize, ResolveError> {
        for (i, entry) in entries.iter().enumerate() {
            let key = entry.key();
            if self.index.contains_key(&key) || entries[..i].iter().any(|e| e.key() == key) {
                return Err(ResolveError::DuplicateKey {
                    group: key.0,
                    row: key.1,
                });
            }
        }

        let added = entries.len();
        for entry in entries {
            self.index.insert(entry.key(), self.entries.len());
            self.entries.push(entry);
        }
        Ok(added)
    }

    pub fn get(&self, key: EntryKey) -> Option<&LocalisedText> {
        self.index.get(&key).map(|&i| &self.entries[i].text)
    }

    pub fn contains_key(&self, key: EntryKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A record that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    pub group: u32,
    pub row_id: u32,
    pub lookup: String,
    pub kind: &'static str,
    pub message: String,
}

/// Counters for a resolution run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub records: usize,
    pub direct_records: usize,
    pub lookup_records: usize,
    pub entries_emitted: usize,
    pub rows_dropped: usize,
    pub syntax_errors: usize,
    pub missing_sheets: usize,
    pub duplicate_keys: usize,
    pub failures: Vec<RecordFailure>,
}

impl ResolutionReport {
    pub fn failed_records(&self) -> usize {
        self.failures.len()
    }
}

/// Output of a full run
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub table: ResolvedTable,
    pub report: ResolutionReport,
}

/// Merges per-record outcomes into a table and report
#[derive(Debug, Default)]
pub struct Resolver {
    table: ResolvedTable,
    report: ResolutionReport,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of resolving `record`
    pub fn push(
        &mut self,
        record: &CompletionRecord,
        outcome: std::result::Result<RecordOutcome, ResolveError>,
    ) {
        self.report.records += 1;

        let result = outcome.and_then(|outcome| {
            let added = self.table.insert_all(outcome.entries)?;
            Ok((outcome.kind, outcome.dropped_rows, added))
        });

        // A rejected record counts only as a failure
        match result {
            Ok((kind, dropped_rows, added)) => {
                match kind {
                    RecordKind::Direct => self.report.direct_records += 1,
                    RecordKind::Lookup => self.report.lookup_records += 1,
                }
                self.report.rows_dropped += dropped_rows;
                self.report.entries_emitted += added;
            }
            Err(error) => self.fail(record, error),
        }
    }

    fn fail(&mut self, record: &CompletionRecord, error: ResolveError) {
        match &error {
            ResolveError::Syntax(_) => self.report.syntax_errors += 1,
            ResolveError::MissingSheet { .. } => self.report.missing_sheets += 1,
            ResolveError::DuplicateKey { .. } => self.report.duplicate_keys += 1,
        }

        tracing::warn!(
            "[RESOLVE] Skipping completion ({}, {}) {:?}: {}",
            record.group,
            record.row_id,
            record.lookup_table,
            error
        );

        self.report.failures.push(RecordFailure {
            group: record.group,
            row_id: record.row_id,
            lookup: record.lookup_table.clone(),
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    pub fn finish(self) -> Resolution {
        Resolution {
            table: self.table,
            report: self.report,
        }
    }
}

/// Resolve every record and merge the results in input order.
pub fn resolve_all(
    records: &[CompletionRecord],
    provider: &dyn SheetProvider,
    options: &ResolveOptions,
) -> Result<Resolution> {
    options.validate()?;

    let outcomes: Vec<_> = if options.parallel {
        records
            .par_iter()
            .map(|record| resolve_record(record, provider, options))
            .collect()
    } else {
        records
            .iter()
            .map(|record| resolve_record(record, provider, options))
            .collect()
    };

    let mut resolver = Resolver::new();
    for (record, outcome) in records.iter().zip(outcomes) {
        resolver.push(record, outcome);
    }
    let resolution = resolver.finish();

    tracing::info!(
        "[RESOLVE] {} records -> {} entries ({} rows dropped, {} records failed)",
        resolution.report.records,
        resolution.report.entries_emitted,
        resolution.report.rows_dropped,
        resolution.report.failed_records()
    );

    Ok(resolution)
}
