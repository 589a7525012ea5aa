//! CLI for issue-transfer.
//!
//! Copies open issues from one or more source repositories into a
//! destination repository.

use clap::Parser;
use issue_transfer::{
    resolve_source_repos, RepoRef, RunSummary, Runner, RunnerError, TransferConfig,
    DEFAULT_API_URL,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Transfer GitHub issues from multiple repositories to a destination repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub API token with repository access.
    #[arg(short = 'k', long)]
    api_key: String,

    /// List of source repositories in 'owner/repo' format.
    #[arg(short = 's', long, num_args = 0..)]
    source_repos: Vec<String>,

    /// File containing source repositories (one per line).
    #[arg(short = 'f', long)]
    source_file: Option<PathBuf>,

    /// Destination repository in 'owner/repo' format.
    #[arg(short = 'd', long)]
    destination_repo: RepoRef,

    /// Base URL of the GitHub REST API.
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // octocrab also compiles in ring, so rustls cannot pick a provider on its own.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Issue transfer aborted");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log lines are compact and carry no module target. `RUST_LOG` adjusts the
/// level, falling back to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves the configuration and runs the transfer.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    // Sources are checked first so that a missing list fails before anything else.
    let sources = resolve_source_repos(&args.source_repos, args.source_file.as_deref())?;

    let config = TransferConfig::new(args.api_key)?.with_api_url(&args.api_url)?;
    let runner = Runner::new(&config)?;
    runner.run(&sources, &args.destination_repo).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nIssue transfer complete");
    println!("\nSummary:");
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );
    println!("  Repositories failed: {}", summary.repositories_failed);
    println!("  Issues transferred: {}", summary.issues_transferred);
    println!("  Issues failed: {}", summary.issues_failed);
    println!("  Pull requests skipped: {}", summary.pull_requests_skipped);

    let mut failures = summary.failures().peekable();
    if failures.peek().is_some() {
        println!("\nFailures:");
        for failure in failures {
            match failure.title() {
                Some(title) => println!("  {} '{}'", failure.repository(), title),
                None => println!("  {}", failure.repository()),
            }
        }
    }
}
