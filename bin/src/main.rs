//! Tamiz CLI binary.
//!
//! Command-line interface for the tamiz stock screener.

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tamiz")]
#[command(about = "Fundamental stock screener for S&P 500 constituents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen the largest S&P 500 companies on fundamentals
    Screen {
        /// Number of companies to screen, taken from the top by market cap
        #[arg(short, long, default_value = "20")]
        top: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the S&P 500 constituents and their sectors
    Universe,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen { top, format } => {
            cmd::screen::run_screen(top, format).await?;
        }
        Commands::Universe => {
            cmd::universe::list_universe().await?;
        }
    }

    Ok(())
}
