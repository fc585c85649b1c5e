//! Error types for price-history ingestion.

use thiserror::Error;

/// Errors raised while reading a price-history file.
///
/// Row-level problems (bad numbers, bad dates) are not errors: they are
/// carried into the parsed records as `NaN` values or undated records.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("Failed to read price history: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV stream itself is malformed (unreadable header row).
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// A column the parser cannot work without is absent from the header.
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}
