//! Crawler module for page fetching and earnings-call discovery
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-request timeouts
//! - HTML anchor extraction
//! - Frontier expansion over guessed event pages
//! - Overall crawl coordination

mod coordinator;
mod expander;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use expander::FrontierExpander;
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::{extract_anchors, Anchor};

use crate::config::Config;
use crate::output::RunReport;
use crate::ScoutError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the record database
/// 2. Build the HTTP client
/// 3. Visit every company's seeds and their guessed event pages
/// 4. Persist what was found, then export if configured
///
/// # Arguments
///
/// * `config` - The validated configuration
///
/// # Returns
///
/// * `Ok(RunReport)` - Crawl completed
/// * `Err(ScoutError)` - Setup, statistics or export failed
pub async fn crawl(config: &Config) -> Result<RunReport, ScoutError> {
    run_crawl(config).await
}
