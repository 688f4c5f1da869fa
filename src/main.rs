// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's public events from GitHub
// 3. Summarize them (overall or per repository)
// 4. Print one line per non-zero kind of activity
// 5. Exit with proper code (0 = success, 1 = error, 2 = bad usage via clap)
//
// Nothing is printed to stdout unless the whole pipeline succeeds; errors and
// logs go to stderr.
// =============================================================================

mod activity;    // src/activity/ - aggregation and rendering
mod cli;         // src/cli.rs - command-line parsing
mod error;       // src/error.rs - typed pipeline errors
mod github;      // src/github/ - GitHub API access

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let username = cli.username();

    let config = github::FetchConfig::new(&cli.api_url)
        .with_context(|| format!("Bad --api-url '{}'", cli.api_url))?;

    let events = github::fetch_events(&config, &username)
        .await
        .with_context(|| format!("Failed to fetch activity for '{}'", username))?;

    let summary = activity::summarize(&events, cli.grouping());
    let lines = activity::render(&summary);

    if lines.is_empty() {
        info!(username = %username, events = events.len(), "no recent activity to report");
    }

    for line in lines {
        println!("- {}", line);
    }

    Ok(())
}

// Logs go to stderr so stdout only ever carries the summary.
// RUST_LOG wins over -v when it is set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
