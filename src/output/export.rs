//! JSON snapshot export
//!
//! Writes every stored record as a pretty-printed JSON array. Object keys
//! follow the record's field order: ticker, company, title, url, call_type,
//! quarter, year, found_on_page, discovered_at.

use crate::record::EarningsCallRecord;
use crate::storage::RecordStore;
use crate::ScoutError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes records to a writer as a JSON array
pub fn write_json<W: Write>(records: &[EarningsCallRecord], writer: W) -> Result<(), ScoutError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Writes records to a JSON file, replacing any existing file
pub fn export_json(records: &[EarningsCallRecord], path: &Path) -> Result<(), ScoutError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Exports the full contents of a store to a JSON file
///
/// # Returns
///
/// The number of records written
pub fn export_store<S: RecordStore + ?Sized>(store: &S, path: &Path) -> Result<usize, ScoutError> {
    let records = store.export_all()?;
    export_json(&records, path)?;
    Ok(records.len())
}
