//! Configuration module for Earnings Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, including the list of companies and their seed URLs.
//!
//! # Example
//!
//! ```no_run
//! use earnings_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Companies to crawl: {}", config.companies.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CompanyEntry, Config, CrawlerConfig, FrontierConfig, OutputConfig, DEFAULT_EVENT_PATHS,
    DEFAULT_EXPORT_PATH, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
