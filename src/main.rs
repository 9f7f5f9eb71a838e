// src/main.rs

//! dailybot CLI
//!
//! One invocation announces one paper. Intended to be driven by cron or a
//! scheduled CI job.

use std::path::PathBuf;

use clap::Parser;

use dailybot::config::Config;
use dailybot::error::Result;
use dailybot::models::VenueConfig;
use dailybot::pipeline;

/// dailybot - Daily Paper Announcer
#[derive(Parser, Debug)]
#[command(
    name = "dailybot",
    version,
    about = "Posts one unannounced OpenReview paper to Slack or Discord"
)]
struct Cli {
    /// Path to the venues JSON file (overrides VENUES_PATH)
    #[arg(long)]
    venues: Option<PathBuf>,

    /// Path to the posted-record ledger (overrides POSTED_RECORD_PATH)
    #[arg(long)]
    record: Option<PathBuf>,

    /// Select and format a paper, but neither post nor record it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() {
    // A missing .env file is fine; exported variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        log::error!("FATAL: {e}");
        std::process::exit(1);
    }
    log::info!("Process completed successfully.");
}

async fn run(cli: Cli) -> Result<()> {
    log::info!("Loading configuration...");

    let env_lookup = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    let mut config = match &cli.venues {
        Some(path) => {
            let venues = VenueConfig::load_all(path)?;
            Config::from_vars(venues, &env_lookup)?
        }
        None => Config::from_env()?,
    };

    if let Some(record) = cli.record {
        config.record_path = record;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    pipeline::run(&config).await
}
