//! Text-Sieve main entry point
//!
//! This is the command-line interface that starts the text preprocessing web service.

use clap::Parser;
use std::path::PathBuf;
use text_sieve::config::{load_config_with_hash, validate, Config};
use text_sieve::fetcher::format_user_agent;
use text_sieve::server::start_server;
use text_sieve::Preprocessor;
use tracing_subscriber::EnvFilter;

/// Text-Sieve: a plain-text preprocessing web service
///
/// Fetches `.txt` documents, strips Project Gutenberg boilerplate, normalizes
/// whitespace, and reports statistics and an extractive summary over a JSON API.
#[derive(Parser, Debug)]
#[command(name = "text-sieve")]
#[command(version)]
#[command(about = "A plain-text preprocessing web service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind-address`
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration, print the effective settings and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
        if let Err(e) = validate(&config) {
            tracing::error!("Invalid --bind override: {}", e);
            return Err(e.into());
        }
    }

    if cli.check_config {
        handle_check_config(&config);
        return Ok(());
    }

    let preprocessor = Preprocessor::new(&config)?;

    match start_server(&config.server, preprocessor).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("text_sieve=info,tower_http=info,warn"),
            1 => EnvFilter::new("text_sieve=debug,tower_http=debug,info"),
            2 => EnvFilter::new("text_sieve=trace,tower_http=trace,debug"),
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

/// Handles --check-config: shows the effective configuration
fn handle_check_config(config: &Config) {
    println!("=== Text-Sieve Configuration ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);
    println!("  Max request body: {} bytes", config.server.max_request_bytes);

    println!("\nFetcher:");
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);
    println!("  Max document size: {} bytes", config.fetcher.max_body_bytes);
    println!("  User agent: {}", format_user_agent(&config.user_agent));

    println!("\nSummary:");
    println!("  Sentences: {}", config.summary.sentence_count);

    println!("\n✓ Configuration is valid");
}
