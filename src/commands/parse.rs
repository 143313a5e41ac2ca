//! Parse command handler - print the selector for lookup references

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::cli::{OutputFormat, ParseArgs};
use crate::commands::CommandContext;
use crate::error::Result;
use crate::output::{encode_json, encode_toon};
use crate::resolve::{LookupPlan, RowFilter};
use crate::selector::{self, SelectorPart};
use crate::text::normalize_lookup;

/// Run the parse command
pub fn run_parse(args: &ParseArgs, ctx: &CommandContext) -> Result<String> {
    let results: Vec<Value> = args.references.iter().map(|r| describe(r)).collect();

    let output = match ctx.format {
        OutputFormat::Json => encode_json(&Value::Array(results))?,
        OutputFormat::Toon => encode_toon(&json!({
            "_type": "selectors",
            "selectors": results,
        })),
        OutputFormat::Text | OutputFormat::Rust => {
            let mut out = String::new();
            for (reference, result) in args.references.iter().zip(&results) {
                let _ = writeln!(out, "{}", reference);
                if let Some(error) = result.get("error").and_then(|e| e.as_str()) {
                    let _ = writeln!(out, "  error: {}", error);
                    continue;
                }
                let _ = writeln!(out, "  sheet: {}", result["sheet"].as_str().unwrap_or(""));
                let _ = writeln!(out, "  selector: {}", result["has_selector"]);
                let _ = writeln!(out, "  rows: {}", result["rows"].as_str().unwrap_or(""));
                let _ = writeln!(out, "  columns: {}", result["columns"]);
                let _ = writeln!(out, "  canonical: {}", result["canonical"].as_str().unwrap_or(""));
            }
            out
        }
    };

    Ok(output)
}

fn describe(reference: &str) -> Value {
    let lookup = normalize_lookup(reference);
    match selector::parse(&lookup) {
        Ok(selector) => {
            let plan = LookupPlan::from_parts(selector.parts());
            // Without a bracket the record's own text is used
            let rows = match &plan.rows {
                _ if !selector.has_selector() => "direct".to_string(),
                RowFilter::All => "all".to_string(),
                RowFilter::Ranges(_) => selector
                    .parts()
                    .iter()
                    .filter(|p| p.selects_rows())
                    .map(SelectorPart::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            };
            json!({
                "input": reference,
                "sheet": selector.sheet,
                "has_selector": selector.has_selector(),
                "parts": selector.parts,
                "rows": rows,
                "columns": plan.columns,
                "canonical": selector.to_string(),
            })
        }
        Err(e) => json!({
            "input": reference,
            "error": e.to_string(),
        }),
    }
}
