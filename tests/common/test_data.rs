//! TestData builder for integration testing
//!
//! Lays out a temporary data directory the way `autotranslate resolve` expects:
//!
//! ```text
//! <tmp>/sheets/<lang>/<Sheet>.json
//! <tmp>/completions.json
//! <tmp>/config.toml
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

pub const LANGS: [&str; 4] = ["en", "ja", "de", "fr"];

/// Builder for temporary sheet data
pub struct TestData {
    dir: TempDir,
}

impl TestData {
    /// Create a new empty data directory
    pub fn new() -> Self {
        let data = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        // Keep tests independent of the developer's own config file
        data.add_file("config.toml", "");
        data
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn sheets_dir(&self) -> PathBuf {
        self.dir.path().join("sheets")
    }

    pub fn completions_path(&self) -> PathBuf {
        self.dir.path().join("completions.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Write a file relative to the data root
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add one language's copy of a sheet
    pub fn add_sheet(&self, lang: &str, name: &str, rows: &[(u32, &[&str])]) -> &Self {
        let rows: serde_json::Map<String, Value> = rows
            .iter()
            .map(|(id, cols)| (id.to_string(), json!(cols)))
            .collect();
        let content = json!({ "rows": rows }).to_string();
        self.add_file(&format!("sheets/{}/{}.json", lang, name), &content)
    }

    /// Add a sheet in all four languages, suffixing each non-empty cell with the language code
    pub fn add_parallel_sheet(&self, name: &str, rows: &[(u32, &[&str])]) -> &Self {
        for lang in LANGS {
            let localized: Vec<(u32, Vec<String>)> = rows
                .iter()
                .map(|(id, cols)| {
                    let cols = cols
                        .iter()
                        .map(|c| {
                            if c.is_empty() {
                                String::new()
                            } else {
                                format!("{}-{}", c, lang)
                            }
                        })
                        .collect();
                    (*id, cols)
                })
                .collect();
            let borrowed: Vec<Vec<&str>> = localized
                .iter()
                .map(|(_, cols)| cols.iter().map(String::as_str).collect())
                .collect();
            let rows: Vec<(u32, &[&str])> = localized
                .iter()
                .zip(&borrowed)
                .map(|((id, _), cols)| (*id, cols.as_slice()))
                .collect();
            self.add_sheet(lang, name, &rows);
        }
        self
    }

    /// Write the completions file from JSON values
    pub fn set_completions(&self, records: Value) -> &Self {
        self.add_file("completions.json", &records.to_string())
    }

    /// Write the config file
    pub fn set_config(&self, toml: &str) -> &Self {
        self.add_file("config.toml", toml)
    }

    /// Run the autotranslate CLI with the data dir's config and return output
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_autotranslate"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("AUTOTRANSLATE_CONFIG", self.config_path())
            .args(args)
            .output()
    }

    /// Run `resolve` against this data with extra args
    pub fn run_resolve(&self, extra: &[&str]) -> std::io::Result<Output> {
        let sheets = self.sheets_dir();
        let completions = self.completions_path();
        let mut args = vec![
            "resolve",
            "--data",
            sheets.to_str().expect("utf-8 temp path"),
            "--completions",
            completions.to_str().expect("utf-8 temp path"),
        ];
        args.extend_from_slice(extra);
        self.run_cli(&args)
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run `resolve` and expect success, return stdout
    pub fn run_resolve_success(&self, extra: &[&str]) -> String {
        let output = self.run_resolve(extra).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "resolve {:?} failed: {}",
            extra,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (stdout, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (String, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

impl Default for TestData {
    fn default() -> Self {
        Self::new()
    }
}
