//! Tests for the `config` CLI command
//!
//! - `config show` - Print the effective configuration
//! - `config path` - Print the config file location
//! - `config get KEY` / `config set KEY VALUE` - Read and update single keys

use crate::common::{assert_json_type, assert_valid_json, TestData};

#[test]
fn test_config_path_follows_env() {
    let data = TestData::new();

    let output = data.run_cli_success(&["config", "path"]);
    assert_eq!(output.trim(), data.config_path().display().to_string());
}

#[test]
fn test_config_show_defaults() {
    let data = TestData::new();

    let output = data.run_cli_success(&["config", "show", "-f", "json"]);
    let json = assert_valid_json(&output, "config show");

    assert_json_type(&json, "config");
    assert_eq!(json["config"]["languages"]["base"], "en");
    assert_eq!(json["config"]["languages"]["order"][1], "ja");
    assert_eq!(json["config"]["lookup"]["placeholders"][0], "@");
}

#[test]
fn test_config_set_then_get() {
    let data = TestData::new();

    let output = data.run_cli_success(&["config", "set", "languages.order", "en,fr"]);
    assert_eq!(output.trim(), "languages.order = en,fr");

    let output = data.run_cli_success(&["config", "get", "languages.order"]);
    assert_eq!(output.trim(), "en,fr");

    let saved = std::fs::read_to_string(data.config_path()).unwrap();
    assert!(saved.contains("[languages]"), "saved: {}", saved);
}

#[test]
fn test_config_set_rejects_base_outside_order() {
    let data = TestData::new();
    data.run_cli_success(&["config", "set", "languages.order", "en,ja"]);

    let output = data
        .run_cli(&["config", "set", "languages.base", "de"])
        .expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(2));
    let output = data.run_cli_success(&["config", "get", "languages.base"]);
    assert_eq!(output.trim(), "en");
}

#[test]
fn test_config_set_unknown_language() {
    let data = TestData::new();

    let (_, stderr) = data.run_cli_failure(&["config", "set", "languages.base", "xx"]);
    assert!(stderr.contains("Unknown language code: xx"), "stderr: {}", stderr);
}

#[test]
fn test_config_explicit_flag_overrides_env() {
    let data = TestData::new();
    let other = data.path().join("other.toml");
    std::fs::write(&other, "[logging]\nlevel = \"warn\"\n").unwrap();

    let output = data.run_cli_success(&[
        "--config",
        other.to_str().unwrap(),
        "config",
        "get",
        "logging.level",
    ]);
    assert_eq!(output.trim(), "warn");
}

#[test]
fn test_invalid_config_file_fails() {
    let data = TestData::new();
    data.set_config("[logging]\nlevel = \"loud\"\n");

    let output = data
        .run_cli(&["config", "show"])
        .expect("Failed to run CLI");

    assert_eq!(output.status.code(), Some(2));
}
