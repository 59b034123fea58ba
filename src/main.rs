//! Pandemic-Report main entry point
//!
//! This is the command-line interface for the country pandemic statistics
//! compiler.

use anyhow::Context;
use clap::Parser;
use pandemic_report::config::Sources;
use pandemic_report::fetch::build_http_client;
use pandemic_report::report::{build_report_set, summary_filename, write_summary_file};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pandemic-Report: country pandemic statistics compiler
///
/// Extracts case and death counts for countries matching a search term,
/// joins them with populations, derives per-100,000 rates, and saves a
/// flat text summary file.
#[derive(Parser, Debug)]
#[command(name = "pandemic-report")]
#[command(version)]
#[command(about = "Compiles country pandemic statistics into a text report", long_about = None)]
struct Cli {
    /// Search term filtering country names (prompted for when omitted)
    #[arg(value_name = "TERM")]
    term: Option<String>,

    /// Path to a TOML file overriding the reference page addresses
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory the summary file is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let sources = match &cli.config {
        Some(path) => Sources::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Sources::default(),
    };

    let term = match cli.term {
        Some(term) => term,
        None => prompt_search_term()?,
    };
    anyhow::ensure!(!term.is_empty(), "Search term must not be empty");

    let client = build_http_client(&sources.user_agent, sources.timeout_secs)?;

    tracing::info!("Compiling report for search term `{}`", term);
    let outcome = match build_report_set(&client, &sources, &term).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Report failed: {}", e);
            return Err(e.into());
        }
    };

    if outcome.reports.is_empty() {
        tracing::warn!("No country matched `{}`", term);
    }

    // The file is only written once the whole set is assembled, so a fatal
    // failure above leaves no partial output behind
    let path = cli.output_dir.join(summary_filename(&term));
    let path = write_summary_file(&outcome.reports, &path)?;

    println!("Your data has been saved in the file: {}", path.display());
    println!(
        "Countries processed: {}, skipped: {}",
        outcome.reports.len(),
        outcome.skipped.len()
    );
    for skipped in &outcome.skipped {
        println!("  skipped {}: {}", skipped.name, skipped.reason);
    }

    Ok(())
}

/// Reads the search term from the interactive prompt
fn prompt_search_term() -> anyhow::Result<String> {
    print!("Please enter a search term: ");
    std::io::stdout().flush()?;

    let mut term = String::new();
    std::io::stdin()
        .read_line(&mut term)
        .context("Failed to read search term")?;

    Ok(term.trim().to_string())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pandemic_report=info,warn"),
            1 => EnvFilter::new("pandemic_report=debug,info"),
            2 => EnvFilter::new("pandemic_report=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
