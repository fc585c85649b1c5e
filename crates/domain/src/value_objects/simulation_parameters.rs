use crate::enums::{PricePolicy, ResamplePeriod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs of one historical buy-and-hold simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// First date of the simulated window (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the simulated window (inclusive).
    pub end_date: NaiveDate,
    /// Capital invested in the first bucket.
    pub starting_capital: f64,
    /// Amount invested in every bucket after the first.
    pub recurring_deposit: f64,
    /// Bucket granularity.
    pub resample_period: ResamplePeriod,
    /// Which price field purchases are made at.
    pub price_policy: PricePolicy,
}

impl SimulationParameters {
    /// Creates parameters for the given window with default amounts.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            ..Default::default()
        }
    }

    /// Sets the starting capital.
    #[must_use]
    pub fn with_starting_capital(mut self, capital: f64) -> Self {
        self.starting_capital = capital;
        self
    }

    /// Sets the recurring deposit.
    #[must_use]
    pub fn with_recurring_deposit(mut self, deposit: f64) -> Self {
        self.recurring_deposit = deposit;
        self
    }

    /// Sets the resample period.
    #[must_use]
    pub fn with_period(mut self, period: ResamplePeriod) -> Self {
        self.resample_period = period;
        self
    }

    /// Sets the price policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PricePolicy) -> Self {
        self.price_policy = policy;
        self
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2005, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            starting_capital: 1000.0,
            recurring_deposit: 300.0,
            resample_period: ResamplePeriod::Monthly,
            price_policy: PricePolicy::Close,
        }
    }
}
