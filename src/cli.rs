//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Auto-translate table generator
#[derive(Parser, Debug)]
#[command(name = "autotranslate")]
#[command(about = "Resolves auto-translate lookup references into per-language text")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: platform config dir)
    #[arg(long, value_name = "FILE", global = true, env = "AUTOTRANSLATE_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve completion records against sheet data
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),

    /// Parse lookup references and print the selector
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ============================================
// Resolve Subcommand
// ============================================

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Directory holding `<lang>/<Sheet>.json` exports
    #[arg(long, value_name = "DIR")]
    pub data: PathBuf,

    /// JSON file with completion records
    #[arg(long, value_name = "FILE")]
    pub completions: PathBuf,

    /// Write entries to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Resolve records in parallel (overrides config)
    #[arg(long)]
    pub parallel: bool,

    /// Print only the run report, not the entries
    #[arg(long)]
    pub summary_only: bool,

    /// Exit with an error if any record failed
    #[arg(long)]
    pub strict: bool,
}

// ============================================
// Parse Subcommand
// ============================================

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Lookup references, e.g. `Item[1-3,col-2]`
    #[arg(value_name = "REFERENCE", required = true)]
    pub references: Vec<String>,
}

// ============================================
// Config Subcommand
// ============================================

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

/// Config operations
#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Get a value by key (e.g. `languages.base`)
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Set a value by key and save
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

// ============================================
// Shared Types
// ============================================

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// TOON (Token-Oriented Object Notation)
    Toon,
    /// JSON - standard JSON output for machine parsing
    Json,
    /// Rust map entries: `(group, row) => LocalisedText { .. },`
    Rust,
}
