//! Output module for run summaries and exports
//!
//! This module handles:
//! - Printing discovery statistics and run reports
//! - Exporting stored records as a JSON snapshot

pub mod export;
pub mod stats;

pub use export::{export_json, export_store, write_json};
pub use stats::{
    format_statistics, load_statistics, print_run_report, print_statistics, CompanyReport,
    RunReport,
};
