//! Config command handler

use serde_json::json;

use crate::cli::{ConfigArgs, ConfigOperation, OutputFormat};
use crate::commands::CommandContext;
use crate::error::{Result, TranslateError};
use crate::output::{encode_json, encode_toon};

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        ConfigOperation::Show => show(ctx),
        ConfigOperation::Path => Ok(format!("{}\n", ctx.config_path.display())),
        ConfigOperation::Get { key } => {
            ctx.config
                .get(key)
                .map(|value| format!("{}\n", value))
                .ok_or_else(|| TranslateError::ConfigError {
                    message: format!(
                        "Unknown configuration key: {} (known: {})",
                        key,
                        crate::config::EngineConfig::keys().join(", ")
                    ),
                })
        }
        ConfigOperation::Set { key, value } => {
            let mut config = ctx.config.clone();
            config.set(key, value)?;
            config.save_to(&ctx.config_path)?;
            tracing::info!("Saved {} to {}", key, ctx.config_path.display());
            Ok(format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        }
    }
}

fn show(ctx: &CommandContext) -> Result<String> {
    let config = &ctx.config;
    match ctx.format {
        OutputFormat::Json | OutputFormat::Toon => {
            let value = serde_json::to_value(config).map_err(|e| TranslateError::OutputError {
                message: format!("JSON serialization failed: {}", e),
            })?;
            let value = json!({
                "_type": "config",
                "path": ctx.config_path.display().to_string(),
                "config": value,
            });
            match ctx.format {
                OutputFormat::Toon => Ok(encode_toon(&value)),
                _ => encode_json(&value),
            }
        }
        OutputFormat::Text | OutputFormat::Rust => {
            let body = toml::to_string_pretty(config).map_err(|e| TranslateError::ConfigError {
                message: format!("Failed to serialize config: {}", e),
            })?;
            Ok(format!("# {}\n{}", ctx.config_path.display(), body))
        }
    }
}
