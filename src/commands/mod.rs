//! Command modules for the autotranslate CLI
//!
//! Each command module implements a single top-level command:
//! - `resolve` - Resolve completion records into localised entries
//! - `parse` - Parse lookup references (debugging aid)
//! - `config` - Show and edit configuration
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format and configuration.

pub mod config;
pub mod parse;
pub mod resolve;

pub use config::run_config;
pub use parse::run_parse;
pub use resolve::run_resolve;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::EngineConfig;

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Effective configuration
    pub config: EngineConfig,
    /// Where the configuration was read from
    pub config_path: PathBuf,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            config: EngineConfig::default(),
            config_path: EngineConfig::default_path(),
        }
    }
}

impl CommandContext {
    pub fn new(
        format: OutputFormat,
        verbose: bool,
        config: EngineConfig,
        config_path: PathBuf,
    ) -> Self {
        Self {
            format,
            verbose,
            config,
            config_path,
        }
    }
}
