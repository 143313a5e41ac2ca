//! autotranslate CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use autotranslate_engine::cli::Commands;
use autotranslate_engine::commands::{run_config, run_parse, run_resolve, CommandContext};
use autotranslate_engine::{Cli, EngineConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> autotranslate_engine::Result<String> {
    let config = EngineConfig::load(cli.config.as_deref())?;
    let config_path = cli.config.clone().unwrap_or_else(EngineConfig::default_path);

    init_logging(&config.logging.level, cli.verbose);
    tracing::debug!("Using config {}", config_path.display());

    let ctx = CommandContext::new(cli.format, cli.verbose, config, config_path);

    match &cli.command {
        Commands::Resolve(args) => run_resolve(args, &ctx),
        Commands::Parse(args) => run_parse(args, &ctx),
        Commands::Config(args) => run_config(args, &ctx),
    }
}

/// Log to stderr. `RUST_LOG` wins over the configured level; `--verbose` forces debug.
fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!(
            "autotranslate_engine={level},autotranslate={level}",
            level = level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
