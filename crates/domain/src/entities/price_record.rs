use crate::enums::PricePolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-period observation from an ingested price history.
///
/// `date` is `None` when the source row carried a date that could not be
/// parsed. Numeric fields may hold `NaN` when the source value did not coerce
/// to a number; consumers are expected to tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Calendar date of the observation.
    pub date: Option<NaiveDate>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl PriceRecord {
    /// Creates a dated record.
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date: Some(date),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a record whose open, high, low and close are all `price`.
    #[must_use]
    pub fn flat(date: NaiveDate, price: f64) -> Self {
        Self::new(date, price, price, price, price, 0.0)
    }

    /// Returns the price selected by `policy`.
    #[must_use]
    pub fn price(&self, policy: PricePolicy) -> f64 {
        match policy {
            PricePolicy::Close => self.close,
            PricePolicy::Low => self.low,
            PricePolicy::High => self.high,
        }
    }

    /// Checks whether the record's date lies in `[start, end]`.
    ///
    /// Undated records are never in range.
    #[must_use]
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date.is_some_and(|d| d >= start && d <= end)
    }
}
