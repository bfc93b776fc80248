//! Storage module for persisting discovered earnings calls
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Idempotent upserts keyed by URL
//! - Aggregate statistics and full-snapshot export

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{RecordStore, StorageError, StorageResult};

use crate::ScoutError;
use std::collections::BTreeMap;
use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(ScoutError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, ScoutError> {
    SqliteStorage::new(path)
}

/// Aggregate counts over the stored records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryStatistics {
    /// Number of stored records
    pub total: u64,

    /// Number of stored records per ticker, ordered by ticker
    pub by_ticker: BTreeMap<String, u64>,
}

impl DiscoveryStatistics {
    /// Sum of the per-ticker counts
    pub fn ticker_sum(&self) -> u64 {
        self.by_ticker.values().sum()
    }
}
