//! Storage traits and error types
//!
//! This module defines the trait interface for record stores and the
//! associated error types.

use crate::record::EarningsCallRecord;
use crate::storage::DiscoveryStatistics;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Corrupt row for {url}: {message}")]
    CorruptRow { url: String, message: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for record store implementations
///
/// Records are keyed by URL. Upserts take `&mut self`; callers sharing a
/// store across tasks must serialize them (e.g. behind a `Mutex`) so the
/// last write wins.
pub trait RecordStore {
    /// Inserts a record, or overwrites the stored record with the same URL
    ///
    /// Re-discovering a URL replaces every attribute with the new values;
    /// the total count does not change.
    fn upsert(&mut self, record: &EarningsCallRecord) -> StorageResult<()>;

    /// Gets a record by URL
    fn get_by_url(&self, url: &str) -> StorageResult<Option<EarningsCallRecord>>;

    /// Counts stored records, in total and per ticker
    ///
    /// The per-ticker counts always sum to the total.
    fn statistics(&self) -> StorageResult<DiscoveryStatistics>;

    /// Returns every stored record in first-insertion order
    fn export_all(&self) -> StorageResult<Vec<EarningsCallRecord>>;
}
