//! Error types and exit codes for autotranslate-engine

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for autotranslate-engine operations
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error at {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Unknown language code: {code}")]
    UnknownLanguage { code: String },

    #[error("Invalid data file {path}: {message}")]
    DataFormat { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Output error: {message}")]
    OutputError { message: String },

    #[error("{count} of {total} completion records failed to resolve")]
    RecordsFailed { count: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslateError {
    /// Convert error to exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Invalid configuration or language code
    /// - 3: Invalid data or output failure
    /// - 4: Records failed in strict mode
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::IoError { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::UnknownLanguage { .. } => ExitCode::from(2),
            Self::ConfigError { .. } => ExitCode::from(2),
            Self::DataFormat { .. } => ExitCode::from(3),
            Self::OutputError { .. } => ExitCode::from(3),
            Self::RecordsFailed { .. } => ExitCode::from(4),
        }
    }
}

/// A lookup reference that does not match the selector grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Selector syntax error at offset {offset} in {input:?}: {message} (near {near:?})")]
pub struct SelectorSyntaxError {
    /// Full input that was being parsed
    pub input: String,
    /// Byte offset of the failure
    pub offset: usize,
    /// Offending substring, starting at `offset`
    pub near: String,
    pub message: String,
}

impl SelectorSyntaxError {
    pub(crate) fn at(input: &str, offset: usize, message: impl Into<String>) -> Self {
        let near: String = input[offset..].chars().take(16).collect();
        Self {
            input: input.to_string(),
            offset,
            near,
            message: message.into(),
        }
    }
}

/// Per-record resolution failure. The run continues after any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Syntax(#[from] SelectorSyntaxError),

    #[error("Sheet {sheet:?} is not available for language {language}")]
    MissingSheet { sheet: String, language: String },

    #[error("Key ({group}, {row}) was already emitted by an earlier record")]
    DuplicateKey { group: u32, row: u32 },
}

impl ResolveError {
    /// Short stable name used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "selector_syntax",
            Self::MissingSheet { .. } => "missing_sheet",
            Self::DuplicateKey { .. } => "duplicate_key",
        }
    }
}

/// Result type alias for autotranslate-engine operations
pub type Result<T> = std::result::Result<T, TranslateError>;
