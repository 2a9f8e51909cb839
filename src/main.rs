//! Main entry point for the elo-ledger batch run
//!
//! Loads configuration, initializes logging, rates the configured match log
//! and writes the final rating table.

use anyhow::Result;
use clap::Parser;
use elo_ledger::config::{validate_config, AppConfig};
use elo_ledger::io::CsvRatingWriter;
use elo_ledger::service::RatingRun;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Elo Ledger - batch ELO ratings from a sequential match log
#[derive(Parser)]
#[command(
    name = "elo-ledger",
    version,
    about = "Compute ELO ratings from a chronological log of pairwise matches",
    long_about = "Elo Ledger reads a CSV log of matches (first participant, second participant, \
                 W/L/D outcome) in chronological order, applies the standard ELO update after \
                 every match, and writes the final rating of every competitor to a two-column CSV."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Match log override
    #[arg(short, long, value_name = "FILE", help = "Override match log CSV path")]
    input: Option<PathBuf>,

    /// Rating table override
    #[arg(short, long, value_name = "FILE", help = "Override rating table CSV path")]
    output: Option<PathBuf>,

    /// K-factor override
    #[arg(short, long, value_name = "K", help = "Override ELO K-factor")]
    k_factor: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with per-match progress logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without rating anything")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display run parameters
fn display_startup_banner(config: &AppConfig) {
    info!("Elo Ledger v{}", elo_ledger::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   K-factor: {}", config.rating.k_factor);
    info!("   Default rating: {}", config.rating.default_rating);
    info!("   Input: {}", config.input.path.display());
    info!("   Output: {}", config.output.path.display());
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(input) = &args.input {
        config.input.path = input.clone();
    }

    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        info!("Dry run completed - configuration is valid");
        return Ok(());
    }

    let run = match RatingRun::new(config) {
        Ok(run) => run,
        Err(e) => {
            error!("Failed to initialize rating run: {:#}", e);
            std::process::exit(1);
        }
    };

    let sink = CsvRatingWriter::new(&run.config().output.path);
    let summary = match run.execute(&sink) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Rating run failed: {:#}", e);
            std::process::exit(1);
        }
    };

    if summary.persisted {
        info!("Ratings written to {}", sink.path().display());
    } else {
        warn!(
            "Could not write {}; printing {} ratings to stdout instead",
            sink.path().display(),
            summary.competitors
        );
        for (competitor, rating) in &summary.standings {
            println!("{},{:?}", competitor, rating);
        }
    }

    Ok(())
}
