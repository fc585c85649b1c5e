use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One resampling bucket: its date and representative price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResampledPoint {
    /// Date of the first record in the bucket.
    pub bucket_date: NaiveDate,
    /// Price purchases in this bucket are made at.
    pub price: f64,
}

/// One point of a historical simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    /// Bucket date.
    pub date: NaiveDate,
    /// Shares held after this bucket's purchase.
    pub shares: f64,
    /// Market value of the holding at the bucket price.
    pub portfolio_value: f64,
    /// Capital contributed so far.
    pub cumulative_deposit: f64,
}

/// One yearly point of a compound projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundPoint {
    /// Year number, starting at 1.
    pub year: u32,
    /// Balance at the end of the year, rounded to cents.
    pub balance: f64,
    /// Capital contributed so far, rounded to cents.
    pub cumulative_deposit: f64,
}

/// Common view over the points of any value-vs-deposit series.
pub trait SeriesPoint {
    /// Value of the holding at this point.
    fn value(&self) -> f64;
    /// Capital contributed up to this point.
    fn deposited(&self) -> f64;
}

impl SeriesPoint for SimulationPoint {
    fn value(&self) -> f64 {
        self.portfolio_value
    }

    fn deposited(&self) -> f64 {
        self.cumulative_deposit
    }
}

impl SeriesPoint for CompoundPoint {
    fn value(&self) -> f64 {
        self.balance
    }

    fn deposited(&self) -> f64 {
        self.cumulative_deposit
    }
}
