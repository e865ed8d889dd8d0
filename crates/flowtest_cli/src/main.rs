//! flowtest CLI - inspect processor descriptors and run the smoke suite.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flowtest_core::{logging, HarnessConfig, CONFIG_FILE_NAME};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "flowtest")]
#[command(about = "Integration-test harness for data-flow processors", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the harness configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known processor descriptors
    Processors,
    /// Print a processor descriptor
    Describe {
        /// Processor name (e.g. ConsumeKafka)
        name: String,
        /// Scheduling strategy (timer-driven, event-driven, cron-driven)
        #[arg(long)]
        strategy: Option<String>,
        /// Scheduling period or cron expression
        #[arg(long)]
        period: Option<String>,
        /// Output format (json, text)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Validate a processor descriptor against its supported properties
    Validate {
        /// Processor name (e.g. ConsumeKafka)
        name: String,
    },
    /// Run the built-in lifecycle smoke suite
    Smoke,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HarnessConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    logging::init(&config.logging);

    match cli.command {
        Commands::Processors => commands::processors::run(),
        Commands::Describe {
            name,
            strategy,
            period,
            format,
        } => commands::describe::run(&name, strategy.as_deref(), period, &format),
        Commands::Validate { name } => commands::validate::run(&name),
        Commands::Smoke => commands::smoke::run(config),
    }
}
