use serde::Deserialize;
use std::time::Duration;

/// Browser-like User-Agent sent when the config does not override it
///
/// Several IR hosts reject requests without a browser signature.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// JSON export written after every crawl unless the config names another file
pub const DEFAULT_EXPORT_PATH: &str = "full_earnings_discovery.json";

/// Event-page paths probed on every seed's site, in probe order
pub const DEFAULT_EVENT_PATHS: &[&str] = &[
    "/events",
    "/events-and-presentations",
    "/webcasts",
    "/earnings",
    "/investor-relations/events",
];

/// Main configuration structure for Earnings Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub frontier: FrontierConfig,
    pub output: OutputConfig,
    #[serde(default, rename = "company")]
    pub companies: Vec<CompanyEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Timeout for configured seed pages (seconds)
    #[serde(rename = "seed-timeout-secs", default = "default_seed_timeout")]
    pub seed_timeout_secs: u64,

    /// Timeout for guessed event pages (seconds); most of them do not exist
    #[serde(rename = "probe-timeout-secs", default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Pause after each seed URL (milliseconds)
    #[serde(rename = "politeness-delay-ms", default = "default_politeness_delay")]
    pub politeness_delay_ms: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl CrawlerConfig {
    pub fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_timeout_secs: default_seed_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            politeness_delay_ms: default_politeness_delay(),
            user_agent: default_user_agent(),
        }
    }
}

/// Frontier expansion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FrontierConfig {
    /// Site-root paths guessed as event pages
    #[serde(default = "default_event_paths")]
    pub paths: Vec<String>,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            paths: default_event_paths(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Path of the JSON export written after a run
    #[serde(rename = "export-path", default = "default_export_path")]
    pub export_path: String,
}

/// A company to crawl, with its investor-relations entry points
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyEntry {
    /// Exchange ticker (e.g. "AAPL")
    pub ticker: String,

    /// Display name (e.g. "Apple Inc.")
    pub name: String,

    /// Seed URLs, crawled in order
    pub seeds: Vec<String>,
}

fn default_seed_timeout() -> u64 {
    10
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_politeness_delay() -> u64 {
    1000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_PATH.to_string()
}

fn default_event_paths() -> Vec<String> {
    DEFAULT_EVENT_PATHS.iter().map(|p| p.to_string()).collect()
}
