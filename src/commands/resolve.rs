//! Resolve command handler

use std::path::Path;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::CommandContext;
use crate::completion::load_completions;
use crate::error::{Result, TranslateError};
use crate::fs_utils::write_atomic;
use crate::output::{render_entries, render_report};
use crate::resolve::resolve_all;
use crate::sheet::SheetStore;

/// Run the resolve command
pub fn run_resolve(args: &ResolveArgs, ctx: &CommandContext) -> Result<String> {
    let mut options = ctx.config.resolve_options();
    if args.parallel {
        options.parallel = true;
    }

    let store = SheetStore::load_dir(&args.data)?;
    let records = load_completions(&args.completions)?;
    let resolution = resolve_all(&records, &store, &options)?;
    let report = &resolution.report;

    let output = if let Some(out_path) = &args.out {
        let format = file_format(out_path, ctx.format);
        let body = render_entries(resolution.table.entries(), format)?;
        write_atomic(out_path, &body)?;
        tracing::info!(
            "Wrote {} entries to {}",
            resolution.table.len(),
            out_path.display()
        );
        render_report(report, ctx.format)?
    } else if args.summary_only {
        render_report(report, ctx.format)?
    } else {
        let mut output = render_entries(resolution.table.entries(), ctx.format)?;
        if ctx.format == OutputFormat::Text {
            output.push('\n');
            output.push_str(&render_report(report, ctx.format)?);
        }
        output
    };

    if args.strict && report.failed_records() > 0 {
        return Err(TranslateError::RecordsFailed {
            count: report.failed_records(),
            total: report.records,
        });
    }

    Ok(output)
}

/// Format for an output file: explicit machine formats win, otherwise the extension decides.
fn file_format(path: &Path, requested: OutputFormat) -> OutputFormat {
    if requested != OutputFormat::Text {
        return requested;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("rs") => OutputFormat::Rust,
        Some("toon") => OutputFormat::Toon,
        _ => OutputFormat::Json,
    }
}
