//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the RecordStore trait.

use crate::record::{CallType, EarningsCallRecord, Quarter};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{RecordStore, StorageError, StorageResult};
use crate::storage::DiscoveryStatistics;
use crate::ScoutError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT ticker, company, title, url, call_type, quarter, year,
     found_on_page, discovered_at FROM earnings_calls";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(ScoutError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, ScoutError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> Result<Self, ScoutError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Gets the total record count
    pub fn count_total(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM earnings_calls", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

/// Column values of one row before the enum and timestamp columns are parsed
struct RawRecord {
    ticker: String,
    company: String,
    title: String,
    url: String,
    call_type: String,
    quarter: String,
    year: i32,
    found_on_page: String,
    discovered_at: String,
}

impl RawRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            ticker: row.get(0)?,
            company: row.get(1)?,
            title: row.get(2)?,
            url: row.get(3)?,
            call_type: row.get(4)?,
            quarter: row.get(5)?,
            year: row.get(6)?,
            found_on_page: row.get(7)?,
            discovered_at: row.get(8)?,
        })
    }

    fn into_record(self) -> StorageResult<EarningsCallRecord> {
        let call_type =
            CallType::from_db_string(&self.call_type).ok_or_else(|| StorageError::CorruptRow {
                url: self.url.clone(),
                message: format!("unknown call_type '{}'", self.call_type),
            })?;

        let quarter =
            Quarter::from_db_string(&self.quarter).ok_or_else(|| StorageError::CorruptRow {
                url: self.url.clone(),
                message: format!("unknown quarter '{}'", self.quarter),
            })?;

        let discovered_at = DateTime::parse_from_rfc3339(&self.discovered_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StorageError::CorruptRow {
                url: self.url.clone(),
                message: format!("bad discovered_at '{}': {}", self.discovered_at, e),
            })?;

        Ok(EarningsCallRecord {
            ticker: self.ticker,
            company: self.company,
            title: self.title,
            url: self.url,
            call_type,
            quarter,
            year: self.year,
            found_on_page: self.found_on_page,
            discovered_at,
        })
    }
}

impl RecordStore for SqliteStorage {
    fn upsert(&mut self, record: &EarningsCallRecord) -> StorageResult<()> {
        // On conflict the row keeps its id, so export order is first-seen order
        self.conn.execute(
            "INSERT INTO earnings_calls
             (ticker, company, title, url, call_type, quarter, year, found_on_page, discovered_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(url) DO UPDATE SET
                ticker = excluded.ticker,
                company = excluded.company,
                title = excluded.title,
                call_type = excluded.call_type,
                quarter = excluded.quarter,
                year = excluded.year,
                found_on_page = excluded.found_on_page,
                discovered_at = excluded.discovered_at",
            params![
                record.ticker,
                record.company,
                record.title,
                record.url,
                record.call_type.to_db_string(),
                record.quarter.to_db_string(),
                record.year,
                record.found_on_page,
                record.discovered_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn get_by_url(&self, url: &str) -> StorageResult<Option<EarningsCallRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE url = ?1", SELECT_COLUMNS))?;

        let raw = stmt
            .query_row(params![url], RawRecord::from_row)
            .optional()?;

        raw.map(RawRecord::into_record).transpose()
    }

    fn statistics(&self) -> StorageResult<DiscoveryStatistics> {
        let mut stmt = self
            .conn
            .prepare("SELECT ticker, COUNT(*) FROM earnings_calls GROUP BY ticker")?;

        let by_ticker = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
            })?
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(DiscoveryStatistics {
            total: self.count_total()?,
            by_ticker,
        })
    }

    fn export_all(&self) -> StorageResult<Vec<EarningsCallRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;

        let rows = stmt
            .query_map([], RawRecord::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(RawRecord::into_record).collect()
    }
}
