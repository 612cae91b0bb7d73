//! StepFlow CLI — the main entry point.
//!
//! Commands:
//! - `run`        — Run a workflow file over some text
//! - `format`     — Apply a single offline formatter
//! - `formatters` — List the formatter operations
//! - `onboard`    — Create the config directory and a sample workflow
//! - `status`     — Show the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "stepflow",
    about = "StepFlow — run text through ordered AI and formatter steps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a workflow file
    Run {
        /// Path to the workflow TOML file
        workflow: PathBuf,

        /// Input text (overrides the workflow's `input`)
        #[arg(short, long)]
        input: Option<String>,

        /// Print the text after every step
        #[arg(short, long)]
        trace: bool,

        /// Serve AI steps from the offline demo substitute
        #[arg(long)]
        demo: bool,
    },

    /// Apply one formatter operation to text (reads stdin when TEXT is omitted)
    Format {
        /// Operation name, e.g. `shorten`, `bullet_points`, `tone:casual`
        operation: String,

        /// Tone for the `tone` operation
        #[arg(long)]
        tone: Option<String>,

        text: Option<String>,
    },

    /// List the available formatter operations
    Formatters,

    /// Create the config directory, default config, and a sample workflow
    Onboard,

    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries pipeline output only
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            workflow,
            input,
            trace,
            demo,
        } => commands::run::run(&workflow, input, trace, demo).await?,
        Commands::Format {
            operation,
            tone,
            text,
        } => commands::format::run(&operation, tone.as_deref(), text)?,
        Commands::Formatters => commands::formatters::run(),
        Commands::Onboard => commands::onboard::run()?,
        Commands::Status => commands::status::run()?,
    }

    Ok(())
}
