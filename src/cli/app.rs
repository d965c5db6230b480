//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use annolint::output::OutputMode;

/// annolint - Quality reports for image annotation tasks
#[derive(Parser, Debug)]
#[command(
    name = "annolint",
    version,
    about = "Validate annotation tasks against their labeling spec",
    long_about = "Fetch completed annotation tasks, run every quality check\n\
                  against every annotation, and write a tiered report of\n\
                  errors, warnings, and passing checks."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the quality checks and write the report
    Report {
        /// Annotation project to fetch tasks for
        #[arg(short, long)]
        project: Option<String>,

        /// Where to write the report document
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Author name recorded in the report
        #[arg(short, long)]
        author: Option<String>,

        /// Task status filter
        #[arg(long, default_value = "completed")]
        status: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Report {
            project,
            output,
            author,
            status,
        }) => commands::report(project, output, author, &status, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("annolint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("annolint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'annolint --help' for usage");
                println!("Run 'annolint report' to generate a quality report");
            }
            Ok(())
        },
    }
}
