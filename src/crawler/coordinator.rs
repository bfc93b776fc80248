//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the per-company crawl loop:
//! - Fetching and classifying every seed page
//! - Running frontier expansion next to each seed
//! - Pausing between seeds
//! - Persisting each company's records
//! - Producing statistics and the JSON export at the end

use crate::classify::classify_anchors;
use crate::config::{CompanyEntry, Config, CrawlerConfig, FrontierConfig};
use crate::crawler::expander::FrontierExpander;
use crate::crawler::fetcher::{FetchResult, HttpFetcher, PageFetcher};
use crate::crawler::parser::extract_anchors;
use crate::output::{export_store, CompanyReport, RunReport};
use crate::record::EarningsCallRecord;
use crate::storage::{RecordStore, SqliteStorage};
use crate::url::parse_http_url;
use crate::ScoutError;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Main crawler coordinator structure
///
/// Owns its fetcher and record store; seeds are processed strictly one at a
/// time.
pub struct Coordinator<F: PageFetcher, S: RecordStore> {
    fetcher: F,
    store: S,
    crawler: CrawlerConfig,
    frontier: FrontierConfig,
    export_path: Option<PathBuf>,
}

impl Coordinator<HttpFetcher, SqliteStorage> {
    /// Creates a coordinator with an HTTP fetcher and the configured database
    pub fn from_config(config: &Config) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(&config.crawler.user_agent)?;
        let store = SqliteStorage::new(Path::new(&config.output.database_path))?;

        Ok(Self::new(
            fetcher,
            store,
            config.crawler.clone(),
            config.frontier.clone(),
        )
        .with_export_path(&config.output.export_path))
    }
}

impl<F: PageFetcher, S: RecordStore> Coordinator<F, S> {
    /// Creates a new coordinator instance
    pub fn new(fetcher: F, store: S, crawler: CrawlerConfig, frontier: FrontierConfig) -> Self {
        Self {
            fetcher,
            store,
            crawler,
            frontier,
            export_path: None,
        }
    }

    /// Writes a JSON export to `path` at the end of each run
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// The record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the coordinator, returning its record store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Runs the crawl over every company, in order
    ///
    /// Fetch and persistence failures are logged and skipped; they never end
    /// the run. Only the closing statistics query and export can fail.
    pub async fn run(&mut self, companies: &[CompanyEntry]) -> Result<RunReport, ScoutError> {
        let start_time = std::time::Instant::now();
        tracing::info!("Starting crawl of {} companies", companies.len());

        let mut report = RunReport::default();

        for company in companies {
            report.companies.push(self.crawl_company(company).await);
        }

        report.statistics = self.store.statistics()?;

        if let Some(path) = &self.export_path {
            tracing::info!("Exporting results to {}", path.display());
            report.exported = export_store(&self.store, path)?;
            report.export_path = Some(path.clone());
        }

        tracing::info!(
            "Crawl completed: {} earnings calls found, {} stored, in {:?}",
            report.total_discovered(),
            report.statistics.total,
            start_time.elapsed()
        );

        Ok(report)
    }

    /// Crawls every seed of one company, then persists what was found
    pub async fn crawl_company(&mut self, company: &CompanyEntry) -> CompanyReport {
        tracing::info!("Scraping {} - {}", company.ticker, company.name);

        let mut records = Vec::new();
        for seed in &company.seeds {
            tracing::info!("Checking: {}", seed);
            records.extend(self.crawl_seed(seed, company).await);
            tokio::time::sleep(self.crawler.politeness_delay()).await;
        }

        let saved = self.persist(&records);
        tracing::info!(
            "Found {} earnings calls for {}",
            records.len(),
            company.ticker
        );

        CompanyReport {
            ticker: company.ticker.clone(),
            name: company.name.clone(),
            discovered: records.len(),
            saved,
        }
    }

    /// Processes a single seed URL
    ///
    /// | Seed fetch result | Seed records | Frontier expansion |
    /// |-------------------|--------------|--------------------|
    /// | Success | classified | yes |
    /// | HTTP error status | none | yes |
    /// | Network error | none | no |
    /// | Unparseable URL | none | no |
    async fn crawl_seed(&self, seed: &str, company: &CompanyEntry) -> Vec<EarningsCallRecord> {
        let seed_url = match parse_http_url(seed) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Error with {}: {}", seed, e);
                return Vec::new();
            }
        };

        let mut records = Vec::new();

        match self
            .fetcher
            .fetch(seed_url.as_str(), self.crawler.seed_timeout())
            .await
        {
            FetchResult::Success { body, .. } => {
                let anchors = extract_anchors(&body);
                records.extend(classify_anchors(
                    &anchors,
                    &seed_url,
                    &company.ticker,
                    &company.name,
                    Utc::now(),
                ));
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Seed page {} returned HTTP {}", seed_url, status_code);
            }
            FetchResult::NetworkError { error, .. } => {
                tracing::error!("Error with {}: {}", seed_url, error);
                return records;
            }
        }

        let expander = FrontierExpander::with_paths(
            &self.fetcher,
            self.frontier.paths.clone(),
            self.crawler.probe_timeout(),
        );
        records.extend(
            expander
                .expand(&seed_url, &company.ticker, &company.name)
                .await,
        );

        records
    }

    /// Upserts each record, logging failures; returns how many were saved
    fn persist(&mut self, records: &[EarningsCallRecord]) -> usize {
        let mut saved = 0;
        for record in records {
            match self.store.upsert(record) {
                Ok(()) => {
                    tracing::debug!("Saved: {} - {}", record.ticker, record.title);
                    saved += 1;
                }
                Err(e) => {
                    tracing::error!("Error saving {}: {}", record.url, e);
                }
            }
        }
        saved
    }
}

/// Runs a complete crawl from a loaded configuration
///
/// # Example
///
/// ```no_run
/// use earnings_scout::config::load_config;
/// use earnings_scout::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let report = run_crawl(&config).await?;
/// println!("{} calls stored", report.statistics.total);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<RunReport, ScoutError> {
    let mut coordinator = Coordinator::from_config(config)?;
    coordinator.run(&config.companies).await
}
