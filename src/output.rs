//! Rendering of resolved entries and run reports

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::error::{Result, TranslateError};
use crate::resolve::{ResolutionReport, ResolvedEntry};

/// Encode a JSON value as TOON using the rtoon library
pub fn encode_toon(value: &Value) -> String {
    rtoon::encode_default(value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

/// Encode a JSON value as pretty-printed JSON text
pub fn encode_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| TranslateError::OutputError {
        message: format!("JSON serialization failed: {}", e),
    })
}

fn to_json(entries: &[ResolvedEntry]) -> Result<Value> {
    serde_json::to_value(entries).map_err(|e| TranslateError::OutputError {
        message: format!("JSON serialization failed: {}", e),
    })
}

/// Render entries in `format`
pub fn render_entries(entries: &[ResolvedEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => encode_json(&to_json(entries)?),
        OutputFormat::Toon => Ok(encode_toon(&json!({
            "_type": "auto_translate",
            "entries": to_json(entries)?,
        }))),
        OutputFormat::Rust => Ok(render_rust_entries(entries, 8)),
        OutputFormat::Text => Ok(render_text_entries(entries)),
    }
}

/// Map-literal entries, each indented by `indent` spaces
pub fn render_rust_entries(entries: &[ResolvedEntry], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}({}, {}) => LocalisedText {{",
            pad, entry.group, entry.row
        );
        for (language, text) in entry.text.iter() {
            let _ = writeln!(
                out,
                "{}    {}: \"{}\",",
                pad,
                language.code(),
                escape_rust(text)
            );
        }
        let _ = writeln!(out, "{}}},", pad);
    }
    out
}

/// Escape for a Rust string literal, leaving non-ASCII text readable
fn escape_rust(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

fn render_text_entries(entries: &[ResolvedEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = write!(out, "({}, {})", entry.group, entry.row);
        for (language, text) in entry.text.iter() {
            let _ = write!(out, "  {}={}", language.code(), text);
        }
        out.push('\n');
    }
    out
}

/// Render a run report in `format`
pub fn render_report(report: &ResolutionReport, format: OutputFormat) -> Result<String> {
    let value = json!({
        "_type": "resolution_report",
        "records": report.records,
        "direct_records": report.direct_records,
        "lookup_records": report.lookup_records,
        "entries_emitted": report.entries_emitted,
        "rows_dropped": report.rows_dropped,
        "syntax_errors": report.syntax_errors,
        "missing_sheets": report.missing_sheets,
        "duplicate_keys": report.duplicate_keys,
        "failures": report.failures,
    });

    match format {
        OutputFormat::Json => encode_json(&value),
        OutputFormat::Toon => Ok(encode_toon(&value)),
        OutputFormat::Text | OutputFormat::Rust => {
            let mut out = String::new();
            out.push_str("═══════════════════════════════════════════════════════\n");
            out.push_str("  AUTO-TRANSLATE RESOLUTION\n");
            out.push_str("═══════════════════════════════════════════════════════\n\n");
            let _ = writeln!(
                out,
                "records: {} ({} direct, {} lookup)",
                report.records, report.direct_records, report.lookup_records
            );
            let _ = writeln!(out, "entries_emitted: {}", report.entries_emitted);
            let _ = writeln!(out, "rows_dropped: {}", report.rows_dropped);
            let _ = writeln!(
                out,
                "failed: {} (syntax {}, missing sheet {}, duplicate key {})",
                report.failed_records(),
                report.syntax_errors,
                report.missing_sheets,
                report.duplicate_keys
            );
            for failure in &report.failures {
                let _ = writeln!(
                    out,
                    "  ({}, {}) {:?} [{}] {}",
                    failure.group, failure.row_id, failure.lookup, failure.kind, failure.message
                );
            }
            Ok(out)
        }
    }
}
