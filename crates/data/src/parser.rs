//! Conversion of raw price rows into sorted price records.

use chrono::NaiveDate;
use fin_planner_domain::entities::PriceRecord;
use serde::Deserialize;
use tracing::{debug, warn};

/// One row of a price-history table, fields as they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPriceRow {
    /// Day-first date, `DD/MM/YYYY`.
    #[serde(rename = "Date", default)]
    pub date: String,
    /// Opening price.
    #[serde(rename = "Open", default)]
    pub open: String,
    /// Highest price.
    #[serde(rename = "High", default)]
    pub high: String,
    /// Lowest price.
    #[serde(rename = "Low", default)]
    pub low: String,
    /// Closing price.
    #[serde(rename = "Close", default)]
    pub close: String,
    /// Traded volume.
    #[serde(rename = "Volume", default)]
    pub volume: String,
}

impl RawPriceRow {
    /// Creates a row from its six fields.
    pub fn new(
        date: impl Into<String>,
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume: volume.into(),
        }
    }

    /// Converts the row into a record. Never fails.
    #[must_use]
    pub fn to_record(&self) -> PriceRecord {
        PriceRecord {
            date: parse_date(&self.date),
            open: coerce_number(&self.open),
            high: coerce_number(&self.high),
            low: coerce_number(&self.low),
            close: coerce_number(&self.close),
            volume: coerce_number(&self.volume),
        }
    }
}

/// Parses a day-first `DD/MM/YYYY` date.
///
/// `"05/03/2020"` is 5 March 2020. Components may omit leading zeros and
/// carry surrounding whitespace. Returns `None` when the string does not have
/// three numeric components or does not name a real calendar day.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Coerces a field to a float, yielding `NaN` when it is not a number.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Parses raw rows into records sorted ascending by date.
///
/// Rows whose date does not parse are kept, undated, after every dated
/// record; their relative order is preserved. Empty input yields an empty
/// vector.
pub fn parse_rows<I>(rows: I) -> Vec<PriceRecord>
where
    I: IntoIterator<Item = RawPriceRow>,
{
    let mut records: Vec<PriceRecord> = rows.into_iter().map(|row| row.to_record()).collect();
    sort_records(&mut records);

    let undated = records.iter().filter(|r| r.date.is_none()).count();
    if undated > 0 {
        warn!(undated, "Price rows with unparseable dates kept at the end");
    }
    debug!(records = records.len(), "Parsed price rows");

    records
}

/// Sorts records ascending by date, undated records last. Stable.
pub fn sort_records(records: &mut [PriceRecord]) {
    records.sort_by_key(|r| (r.date.is_none(), r.date));
}
