//! Error Handling and Edge Case Tests
//!
//! Bad input files, missing data and unusual sheet content.

use serde_json::json;

use crate::common::{assert_valid_json, entry_keys, TestData};

// ============================================================================
// MISSING INPUT TESTS
// ============================================================================

#[test]
fn test_missing_data_dir() {
    let data = TestData::new();
    data.set_completions(json!([]));

    let output = data.run_resolve(&[]).expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"), "stderr: {}", stderr);
}

#[test]
fn test_missing_completions_file() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);

    let output = data.run_resolve(&[]).expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_required_args() {
    let data = TestData::new();

    let (_, stderr) = data.run_cli_failure(&["resolve"]);
    assert!(stderr.contains("--data"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_command() {
    let data = TestData::new();

    let (_, stderr) = data.run_cli_failure(&["invalidcommand"]);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should give helpful error message"
    );
}

// ============================================================================
// MALFORMED FILE TESTS
// ============================================================================

#[test]
fn test_malformed_completions_json() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.add_file("completions.json", "{ not json");

    let output = data.run_resolve(&[]).expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("completions.json"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_sheet_json() {
    let data = TestData::new();
    data.add_file("sheets/en/Item.json", "{\"rows\": {\"one\": [\"x\"]}}");
    data.set_completions(json!([]));

    let output = data.run_resolve(&[]).expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Item.json"), "stderr: {}", stderr);
}

#[test]
fn test_non_json_files_and_unknown_dirs_are_ignored() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.add_file("sheets/en/README.txt", "not a sheet");
    data.add_file("sheets/xx/Item.json", "garbage");
    data.set_completions(json!([{ "group": 1, "row_id": 0, "lookup_table": "Item[1]" }]));

    let output = data.run_resolve_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "ignored files");
    assert_eq!(entry_keys(&json), vec![(1, 1)]);
}

// ============================================================================
// DATA EDGE CASES
// ============================================================================

#[test]
fn test_empty_completions() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.set_completions(json!([]));

    let output = data.run_resolve_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "empty completions");
    assert!(entry_keys(&json).is_empty());
}

#[test]
fn test_selector_past_last_row() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"]), (2, &["Ether"])]);
    data.set_completions(json!([
        { "group": 1, "row_id": 0, "lookup_table": "Item[2-1000]" },
        { "group": 2, "row_id": 0, "lookup_table": "Item[12-5]" },
    ]));

    let output = data.run_resolve_success(&["--summary-only", "-f", "json"]);
    let json = assert_valid_json(&output, "past last row");

    assert_eq!(json["entries_emitted"], 1);
    assert_eq!(json["lookup_records"], 2);
    assert_eq!(json["failures"], json!([]));
}

#[test]
fn test_column_past_row_width_is_empty() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.set_completions(json!([
        { "group": 1, "row_id": 0, "lookup_table": "Item[1,col-9]" },
        { "group": 2, "row_id": 0, "lookup_table": "Item[1,col-9,col-0]" },
    ]));

    let output = data.run_resolve_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "wide column");
    assert_eq!(entry_keys(&json), vec![(2, 1)]);
}

#[test]
fn test_whitespace_only_cells_count_as_empty() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.add_sheet("fr", "Item", &[(1, &[" \u{00AD} "])]);
    data.set_completions(json!([{ "group": 1, "row_id": 0, "lookup_table": "Item[1]" }]));

    let output = data.run_resolve_success(&["--summary-only", "-f", "json"]);
    let json = assert_valid_json(&output, "blank cell");
    assert_eq!(json["entries_emitted"], 0);
    assert_eq!(json["rows_dropped"], 1);
}

#[test]
fn test_missing_sheet_reported_and_run_continues() {
    let data = TestData::new();
    data.add_parallel_sheet("Item", &[(1, &["Potion"])]);
    data.set_completions(json!([
        { "group": 1, "row_id": 0, "lookup_table": "Nowhere[1]" },
        { "group": 2, "row_id": 0, "lookup_table": "Item[1]" },
    ]));

    let output = data.run_resolve_success(&["--summary-only", "-f", "json"]);
    let json = assert_valid_json(&output, "missing sheet");

    assert_eq!(json["missing_sheets"], 1);
    assert_eq!(json["entries_emitted"], 1);
    assert_eq!(json["failures"][0]["kind"], "missing_sheet");
}

#[test]
fn test_unicode_sheet_text() {
    let data = TestData::new();
    data.add_sheet("en", "Item", &[(1, &["Hi-Potion"])]);
    data.add_sheet("ja", "Item", &[(1, &["ハイポーション"])]);
    data.add_sheet("de", "Item", &[(1, &["Hi-Trank"])]);
    data.add_sheet("fr", "Item", &[(1, &["Potion supérieure"])]);
    data.set_completions(json!([{ "group": 1, "row_id": 0, "lookup_table": "Item[1]" }]));

    let output = data.run_resolve_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "unicode");

    assert_eq!(json[0]["text"]["ja"], "ハイポーション");
    assert_eq!(json[0]["text"]["fr"], "Potionsupérieure");
}
