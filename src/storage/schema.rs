//! Database schema definitions
//!
//! This module contains the SQL schema for the Earnings Scout database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per discovered earnings-call asset, keyed by URL
CREATE TABLE IF NOT EXISTS earnings_calls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticker TEXT NOT NULL,
    company TEXT NOT NULL,
    title TEXT NOT NULL,
    url TEXT NOT NULL UNIQUE,
    call_type TEXT NOT NULL,
    quarter TEXT NOT NULL,
    year INTEGER NOT NULL,
    found_on_page TEXT NOT NULL,
    discovered_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_earnings_calls_ticker ON earnings_calls(ticker);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
