//! Reading price histories from CSV.
//!
//! The expected header is `Date,Open,High,Low,Close,Volume` with day-first
//! dates. Blank lines are skipped and fields are trimmed. Columns other than
//! `Date` may be missing; their values become `NaN`.

use crate::error::DataError;
use crate::history::PriceHistory;
use crate::parser::RawPriceRow;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Reads a price history from any CSV byte stream.
///
/// # Errors
/// Returns an error if the header row cannot be read, lacks a `Date` column,
/// or the underlying reader fails. Individual rows that cannot be decoded are
/// skipped and counted in [`PriceHistory::skipped_rows`].
pub fn read_csv<R: Read>(reader: R) -> Result<PriceHistory, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == "Date") {
        return Err(DataError::MissingColumn("Date"));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.deserialize::<RawPriceRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                // +2: 1-based lines and the header row
                warn!(line = idx + 2, error = %e, "Skipping unreadable CSV row");
                skipped += 1;
            }
        }
    }

    Ok(PriceHistory::from_rows(rows).with_skipped_rows(skipped))
}

/// Loads a price history from a CSV file.
///
/// The file is read asynchronously; parsing happens once the bytes are in
/// memory.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a usable CSV.
pub async fn load_csv(path: impl AsRef<Path>) -> Result<PriceHistory, DataError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let history = read_csv(bytes.as_slice())?;

    info!(
        path = %path.display(),
        records = history.len(),
        undated = history.undated_count(),
        skipped = history.skipped_rows(),
        "Loaded price history"
    );

    Ok(history)
}
