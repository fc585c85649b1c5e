use crate::enums::DepositFrequency;
use serde::{Deserialize, Serialize};

/// Inputs of a compound-interest projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundParameters {
    /// Initial balance.
    pub principal: f64,
    /// Nominal annual interest rate in percent (5.0 = 5 %).
    pub annual_rate_percent: f64,
    /// Number of yearly points to project.
    pub years: u32,
    /// Amount added every deposit period.
    pub recurring_deposit: f64,
    /// Deposit and compounding frequency.
    pub deposit_frequency: DepositFrequency,
}

impl CompoundParameters {
    /// Creates parameters with no recurring deposit.
    #[must_use]
    pub fn new(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
            recurring_deposit: 0.0,
            deposit_frequency: DepositFrequency::Monthly,
        }
    }

    /// Sets the recurring deposit and its frequency.
    #[must_use]
    pub fn with_deposit(mut self, amount: f64, frequency: DepositFrequency) -> Self {
        self.recurring_deposit = amount;
        self.deposit_frequency = frequency;
        self
    }
}

impl Default for CompoundParameters {
    fn default() -> Self {
        Self::new(1000.0, 5.0, 10)
    }
}
