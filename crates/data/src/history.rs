//! A parsed, sorted price history.

use crate::parser::{RawPriceRow, parse_rows};
use chrono::NaiveDate;
use fin_planner_domain::entities::PriceRecord;

/// Records parsed from one price-history file, sorted ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    records: Vec<PriceRecord>,
    skipped_rows: usize,
}

impl PriceHistory {
    /// Parses raw rows into a history.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawPriceRow>,
    {
        Self {
            records: parse_rows(rows),
            skipped_rows: 0,
        }
    }

    /// Records how many CSV rows could not be read at all.
    #[must_use]
    pub fn with_skipped_rows(mut self, skipped: usize) -> Self {
        self.skipped_rows = skipped;
        self
    }

    /// Returns the sorted records.
    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Consumes the history and returns the records.
    #[must_use]
    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the history has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose date did not parse.
    #[must_use]
    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|r| r.date.is_none()).count()
    }

    /// Number of CSV rows dropped because they could not be read.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Returns the first and last dates covered, ignoring undated records.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date?;
        let last = self.records.iter().rev().find_map(|r| r.date)?;
        Some((first, last))
    }
}
