//! Statistics and run summaries
//!
//! This module provides the human-readable discovery summary printed after
//! a crawl and by `--stats`.

use crate::storage::{DiscoveryStatistics, RecordStore};
use crate::ScoutError;
use std::path::PathBuf;

/// Discovery outcome for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyReport {
    pub ticker: String,
    pub name: String,

    /// Records classified across all seeds and event pages (before dedup)
    pub discovered: usize,

    /// Records successfully written to the store
    pub saved: usize,
}

/// Outcome of a full crawl run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Per-company results, in configuration order
    pub companies: Vec<CompanyReport>,

    /// Store-wide counts after the run
    pub statistics: DiscoveryStatistics,

    /// Where the JSON export was written, if it was
    pub export_path: Option<PathBuf>,

    /// Number of records in the JSON export
    pub exported: usize,
}

impl RunReport {
    /// Total records discovered in this run, duplicates included
    pub fn total_discovered(&self) -> usize {
        self.companies.iter().map(|c| c.discovered).sum()
    }

    /// Records that were discovered but could not be saved
    pub fn failed_saves(&self) -> usize {
        self.companies
            .iter()
            .map(|c| c.discovered.saturating_sub(c.saved))
            .sum()
    }
}

/// Loads statistics from a store
pub fn load_statistics<S: RecordStore + ?Sized>(
    store: &S,
) -> Result<DiscoveryStatistics, ScoutError> {
    Ok(store.statistics()?)
}

/// Formats store statistics as printable lines
pub fn format_statistics(stats: &DiscoveryStatistics) -> String {
    let mut out = String::new();
    out.push_str("=== Discovery Summary ===\n\n");
    out.push_str(&format!("Total earnings calls stored: {}\n", stats.total));

    if !stats.by_ticker.is_empty() {
        out.push_str("\nBy company:\n");
        for (ticker, count) in &stats.by_ticker {
            out.push_str(&format!("  {}: {} calls\n", ticker, count));
        }
    }

    out
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &DiscoveryStatistics) {
    print!("{}", format_statistics(stats));
}

/// Prints the summary of a finished run to stdout
pub fn print_run_report(report: &RunReport) {
    println!("=== Crawl Results ===\n");
    for company in &report.companies {
        println!(
            "  {} ({}): {} found, {} saved",
            company.ticker, company.name, company.discovered, company.saved
        );
    }
    println!();

    print_statistics(&report.statistics);
    println!();

    if let Some(path) = &report.export_path {
        println!(
            "Exported {} records to {}",
            report.exported,
            path.display()
        );
    }

    if report.failed_saves() > 0 {
        println!("{} records could not be saved (see log)", report.failed_saves());
    }

    println!("Found {} earnings calls total", report.total_discovered());
}
