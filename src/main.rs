//! Earnings Scout main entry point
//!
//! This is the command-line interface for the earnings-call discovery crawler.

use anyhow::Context;
use clap::Parser;
use earnings_scout::config::{load_config_with_hash, Config};
use earnings_scout::crawler::{crawl, FrontierExpander, HttpFetcher};
use earnings_scout::output::{export_store, load_statistics, print_run_report, print_statistics};
use earnings_scout::storage::open_storage;
use earnings_scout::url::parse_http_url;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Earnings Scout: finds earnings-call webcasts on investor-relations sites
///
/// Earnings Scout visits each configured company's IR pages, probes a few
/// likely event pages next to them, and records every link that looks like
/// an earnings call, deduplicated by URL.
#[derive(Parser, Debug)]
#[command(name = "earnings-scout")]
#[command(version)]
#[command(about = "Discovers earnings-call media on investor-relations sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with_all = ["stats", "export"])]
    dry_run: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with_all = ["dry_run", "export"])]
    stats: bool,

    /// Write the JSON export from existing data and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config, &config_hash)
    } else if cli.stats {
        handle_stats(&config)
    } else if cli.export {
        handle_export(&config)
    } else {
        handle_crawl(&config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("earnings_scout=info,warn"),
            1 => EnvFilter::new("earnings_scout=debug,info"),
            2 => EnvFilter::new("earnings_scout=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config, config_hash: &str) -> anyhow::Result<()> {
    println!("=== Earnings Scout Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed timeout: {}s", config.crawler.seed_timeout_secs);
    println!("  Probe timeout: {}s", config.crawler.probe_timeout_secs);
    println!("  Politeness delay: {}ms", config.crawler.politeness_delay_ms);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);
    println!("  Export: {}", config.output.export_path);

    let fetcher = HttpFetcher::new(&config.crawler.user_agent)?;
    let expander = FrontierExpander::with_paths(
        &fetcher,
        config.frontier.paths.clone(),
        config.crawler.probe_timeout(),
    );

    println!("\nCompanies ({}):", config.companies.len());
    for company in &config.companies {
        println!("  - {} ({}, {} seeds)", company.ticker, company.name, company.seeds.len());
        for seed in &company.seeds {
            println!("    * {}", seed);
            let seed_url = parse_http_url(seed)?;
            for candidate in expander.candidate_urls(&seed_url) {
                println!("      probe {}", candidate);
            }
        }
    }

    let seed_count: usize = config.companies.iter().map(|c| c.seeds.len()).sum();
    println!("\n✓ Configuration is valid (hash: {})", config_hash);
    println!(
        "✓ Would visit {} seed URLs and probe up to {} event pages",
        seed_count,
        seed_count * config.frontier.paths.len()
    );

    Ok(())
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.output.database_path);

    let storage = open_storage(Path::new(&config.output.database_path))?;
    let stats = load_statistics(&storage)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the --export mode: writes the JSON snapshot of the database
fn handle_export(config: &Config) -> anyhow::Result<()> {
    let export_path = &config.output.export_path;

    println!("=== Exporting Earnings Calls ===\n");
    println!("Database: {}", config.output.database_path);
    println!("Output: {}", export_path);
    println!();

    let storage = open_storage(Path::new(&config.output.database_path))?;

    tracing::info!("Loading earnings calls from database...");
    let written = export_store(&storage, Path::new(export_path))?;

    println!("✓ Exported {} records to: {}", written, export_path);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    let seed_count: usize = config.companies.iter().map(|c| c.seeds.len()).sum();
    tracing::info!(
        "Companies: {}, seed URLs: {}, event paths per seed: {}",
        config.companies.len(),
        seed_count,
        config.frontier.paths.len()
    );

    match crawl(config).await {
        Ok(report) => {
            print_run_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
