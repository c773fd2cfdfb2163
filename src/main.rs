use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use covtrack::cli;
use covtrack::format::FormatConfig;
use covtrack::github;

/// covtrack — Folder-level coverage delta reports for CI comments.
#[derive(Parser)]
#[command(name = "covtrack", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ReportArgs {
    /// Path to the coverage summary JSON.
    #[arg(long, default_value = "coverage/coverage-summary.json")]
    coverage: PathBuf,

    /// Coverage summary from a prior run, used to compute deltas.
    #[arg(long)]
    prior: Option<PathBuf>,

    /// Base path folder keys are computed relative to (default: current directory).
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Base URL for report links, e.g. "/pub/my-project/lcov-report".
    /// If omitted, rows are rendered without links.
    #[arg(long)]
    base_url: Option<String>,

    /// Percentage below which coverage is classified as an error.
    #[arg(long, default_value_t = 50.0)]
    error_threshold: f64,

    /// Percentage below which coverage is classified as a warning.
    #[arg(long, default_value_t = 80.0)]
    warn_threshold: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the coverage report to stdout.
    Report(ReportArgs),

    /// Render the report and post it as a pull request comment
    /// (requires GitHub Actions environment variables).
    Comment(ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => {
            let body = run_report(&args)?;
            println!("{body}");
            Ok(())
        }
        Commands::Comment(args) => {
            let context = github::Context::from_env()?;
            let body = run_report(&args)?;
            context.post_comment(&body)
        }
    }
}

fn run_report(args: &ReportArgs) -> Result<String> {
    let base_path = match &args.base_path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let config = FormatConfig {
        error_threshold: args.error_threshold,
        warn_threshold: args.warn_threshold,
        ..Default::default()
    };
    cli::cmd_report(
        &args.coverage,
        args.prior.as_deref(),
        &base_path,
        args.base_url.as_deref(),
        &config,
    )
}
