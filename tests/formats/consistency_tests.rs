//! Format Consistency Tests
//!
//! Tests verifying that all output formats carry the same entries:
//! - JSON validity and structure
//! - TOON format markers
//! - Rust map-literal output
//! - Cross-format data equivalence

use serde_json::json;

use crate::common::{assert_valid_json, assert_valid_toon, entry_keys, TestData};

fn data() -> TestData {
    let data = TestData::new();
    data.add_parallel_sheet("Mount", &[(1, &["Chocobo"]), (2, &["Wolf"]), (5, &[""])]);
    data.add_sheet("en", "Quote", &[(1, &["Say \"hi\""])]);
    data.add_sheet("ja", "Quote", &[(1, &["a\\b"])]);
    data.add_sheet("de", "Quote", &[(1, &["x"])]);
    data.add_sheet("fr", "Quote", &[(1, &["y"])]);
    data.set_completions(json!([
        { "group": 4, "row_id": 0, "lookup_table": "Mount[]" },
        { "group": 5, "row_id": 0, "lookup_table": "Quote[1]" },
    ]));
    data
}

// ============================================================================
// FORMAT VALIDITY TESTS
// ============================================================================

#[test]
fn test_json_validity_resolve() {
    let output = data().run_resolve_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "resolve json");

    assert!(json.is_array());
    assert_eq!(entry_keys(&json), vec![(4, 1), (4, 2), (5, 1)]);
}

#[test]
fn test_toon_validity_resolve() {
    let output = data().run_resolve_success(&["-f", "toon"]);
    assert_valid_toon(&output, "resolve toon");
    assert!(output.contains("auto_translate"));
    assert!(output.contains("Chocobo-en"));
}

#[test]
fn test_rust_output_escapes_literals() {
    let output = data().run_resolve_success(&["-f", "rust"]);

    assert!(output.contains("        (4, 1) => LocalisedText {\n"));
    assert!(output.contains("            en: \"Chocobo-en\",\n"));
    assert!(output.contains("en: \"Say\\\"hi\\\"\","), "Output: {}", output);
    assert!(output.contains("ja: \"a\\\\b\","), "Output: {}", output);
}

// ============================================================================
// CROSS-FORMAT CONSISTENCY TESTS
// ============================================================================

#[test]
fn test_all_formats_carry_same_entries() {
    let data = data();

    let json_out = data.run_resolve_success(&["-f", "json"]);
    let text_out = data.run_resolve_success(&["-f", "text"]);
    let rust_out = data.run_resolve_success(&["-f", "rust"]);

    let json = assert_valid_json(&json_out, "json");
    for (group, row) in entry_keys(&json) {
        let key = format!("({}, {})", group, row);
        assert!(text_out.contains(&key), "text output missing {}", key);
        assert!(rust_out.contains(&key), "rust output missing {}", key);
    }
    assert!(!text_out.contains("(4, 5)"));
}

#[test]
fn test_pretty_is_text_alias() {
    let data = data();

    let text_out = data.run_resolve_success(&["-f", "text"]);
    let pretty_out = data.run_resolve_success(&["-f", "pretty"]);
    assert_eq!(text_out, pretty_out);
}
