//! Pagesweep CLI - Main Entry Point
//!
//! Command-line interface for running parallel UI regression sweeps and
//! inspecting how work will be distributed across workers.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{assign, components, run};

/// Pagesweep - parallel UI regression sweeps
#[derive(Parser)]
#[command(name = "pagesweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a component sweep
    Run(run::RunArgs),

    /// Preview the worker assignment for the input source
    Assign(assign::AssignArgs),

    /// List known components
    Components,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run(args) => {
            let clean = run::execute(args).await?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Assign(args) => assign::execute(args, cli.format)?,
        Commands::Components => components::execute(cli.format)?,
        Commands::Version => {
            println!("Pagesweep CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Parallel UI regression sweeps for localized marketing pages");
        }
    }

    Ok(())
}
