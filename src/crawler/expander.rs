//! Frontier expansion: guessing and probing event pages
//!
//! Many IR sites publish their webcast archive on an "events" page that the
//! configured seeds do not link to directly. For every seed, a short fixed
//! list of site-root paths is probed; pages that exist are classified like
//! seed pages. Links on those pages are never followed further.

use crate::classify::classify_anchors;
use crate::config::DEFAULT_EVENT_PATHS;
use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::parser::extract_anchors;
use crate::record::EarningsCallRecord;
use crate::url::site_url;
use chrono::Utc;
use std::time::Duration;
use url::Url;

/// Probes guessed event pages next to a seed URL
pub struct FrontierExpander<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    paths: Vec<String>,
    probe_timeout: Duration,
}

impl<'a, F: PageFetcher + ?Sized> FrontierExpander<'a, F> {
    /// Creates an expander probing the default event paths
    pub fn new(fetcher: &'a F, probe_timeout: Duration) -> Self {
        Self::with_paths(
            fetcher,
            DEFAULT_EVENT_PATHS.iter().map(|p| p.to_string()).collect(),
            probe_timeout,
        )
    }

    /// Creates an expander probing the given site-root paths, in order
    pub fn with_paths(fetcher: &'a F, paths: Vec<String>, probe_timeout: Duration) -> Self {
        Self {
            fetcher,
            paths,
            probe_timeout,
        }
    }

    /// Builds the candidate event-page URLs for a seed, in probe order
    ///
    /// Candidates share the seed's scheme, host and port.
    pub fn candidate_urls(&self, seed: &Url) -> Vec<Url> {
        self.paths
            .iter()
            .filter_map(|path| match site_url(seed, path) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::debug!("Cannot build candidate {} for {}: {}", path, seed, e);
                    None
                }
            })
            .collect()
    }

    /// Probes every candidate of `seed` and classifies the pages that exist
    ///
    /// Each candidate is fetched once with the probe timeout. Missing pages,
    /// error statuses and network failures are skipped without error: a
    /// guessed page not existing is the common case.
    ///
    /// # Returns
    ///
    /// Records from all candidate pages that answered, in probe order; empty
    /// when none did.
    pub async fn expand(
        &self,
        seed: &Url,
        ticker: &str,
        company: &str,
    ) -> Vec<EarningsCallRecord> {
        let mut records = Vec::new();

        for candidate in self.candidate_urls(seed) {
            match self.fetcher.fetch(candidate.as_str(), self.probe_timeout).await {
                FetchResult::Success { body, .. } => {
                    tracing::info!("Found event page: {}", candidate);
                    let anchors = extract_anchors(&body);
                    let found =
                        classify_anchors(&anchors, &candidate, ticker, company, Utc::now());
                    tracing::debug!(
                        "{} earnings links on event page {}",
                        found.len(),
                        candidate
                    );
                    records.extend(found);
                }
                FetchResult::HttpError { status_code } => {
                    tracing::debug!("No event page at {} (HTTP {})", candidate, status_code);
                }
                FetchResult::NetworkError { error, .. } => {
                    tracing::debug!("No event page at {} ({})", candidate, error);
                }
            }
        }

        records
    }
}
