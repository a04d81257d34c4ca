//! # portfolio
//!
//! Native companion to the portfolio page.
//!
//! - `portfolio render` fetches the GitHub listing once and writes the whole
//!   page as a static HTML document.
//! - `portfolio repos` prints the listing, most recently updated first.
//!
//! ## Usage
//!
//! ```bash
//! portfolio render --out dist/index.html
//! portfolio render --offline --profile me.toml > index.html
//! portfolio repos --json
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use portfolio_page::repos::DEFAULT_API_BASE;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Render the portfolio page as static HTML or inspect its project listing")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the project listing and write the page as a static HTML document
    Render(RenderArgs),
    /// Print the project listing, most recently updated first
    Repos(ReposArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Profile TOML overriding the built-in page owner
    #[arg(long)]
    profile: Option<PathBuf>,

    /// GitHub API root
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file (default: stdout)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Skip the fetch and render an empty project grid
    #[arg(long)]
    offline: bool,
}

#[derive(Args, Debug)]
struct ReposArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,
}

async fn run(cli: Cli) -> Result<()> {
    // Logs go to stderr; stdout carries the page or the listing.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    tracing::debug!("portfolio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Render(args) => commands::render(args).await,
        Command::Repos(args) => commands::repos(args).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
