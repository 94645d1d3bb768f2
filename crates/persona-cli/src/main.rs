//! Persona CLI - analyze onboarding quiz answers from the terminal
//!
//! This CLI lets developers and content designers:
//! - Run the persona analysis over an answer record (file or stdin)
//! - Browse the persona catalogue
//! - Validate the built-in bucket and persona tables

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use persona_analysis::ProfileAnalyzer;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use crate::commands::{analyze, personas, tables};
use crate::config::{CliConfig, LoggingConfig};
use crate::error::CliResult;
use crate::output::{print_error, OutputFormat};

/// Persona CLI application
#[derive(Parser)]
#[command(name = "persona")]
#[command(about = "Persona Profiles - quiz answer analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PERSONA_CONFIG")]
    config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Log level (overrides RUST_LOG and configuration)
    #[arg(long, env = "PERSONA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Analyze an answer record
    Analyze(analyze::AnalyzeArgs),

    /// List the personas
    Personas,

    /// Validate the built-in tables
    CheckTables,

    /// Show effective configuration
    Config,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    let level_given = cli.log_level.is_some();
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json_logs;
    init_tracing(&config.logging, level_given);

    config.analyzer.validate()?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Analyze(args) => {
            let analyzer = ProfileAnalyzer::new(config.analyzer);
            analyze::execute(args, &analyzer, cli.output)
        }
        Commands::Personas => personas::execute(cli.output),
        Commands::CheckTables => tables::execute(),
        Commands::Config => {
            println!("{}", output::render(&config, cli.output)?);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays parseable.
///
/// An explicit `--log-level` wins over `RUST_LOG`; otherwise `RUST_LOG` wins
/// over the configured level.
fn init_tracing(logging: &LoggingConfig, level_given: bool) {
    let env_filter = if level_given {
        tracing_subscriber::EnvFilter::new(&logging.level)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level))
    };

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
