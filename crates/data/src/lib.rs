//! Price-history ingestion.
//!
//! Turns an uploaded price table (`Date,Open,High,Low,Close,Volume`, dates
//! day-first) into a sorted sequence of [`PriceRecord`]s. Malformed values
//! never fail the parse: they surface as `NaN` fields or undated records.
//!
//! [`PriceRecord`]: fin_planner_domain::entities::PriceRecord

/// CSV reading and file loading.
pub mod csv_source;
/// Error types.
pub mod error;
/// Parsed price histories.
pub mod history;
/// Row parsing and sorting.
pub mod parser;

pub use csv_source::{load_csv, read_csv};
pub use error::DataError;
pub use history::PriceHistory;
pub use parser::{RawPriceRow, coerce_number, parse_date, parse_rows};
