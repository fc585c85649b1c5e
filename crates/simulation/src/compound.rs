//! Compound-interest projection.

use fin_planner_domain::math::round_cents;
use fin_planner_domain::value_objects::{CompoundParameters, CompoundPoint};
use tracing::debug;

/// Projects a balance growing with compound interest and recurring deposits.
#[derive(Debug, Clone, Copy)]
pub struct CompoundProjector {
    params: CompoundParameters,
}

impl CompoundProjector {
    /// Creates a projector for the given parameters.
    #[must_use]
    pub fn new(params: CompoundParameters) -> Self {
        Self { params }
    }

    /// Returns the parameters the projector runs with.
    #[must_use]
    pub fn params(&self) -> &CompoundParameters {
        &self.params
    }

    /// Runs the projection.
    #[must_use]
    pub fn run(&self) -> Vec<CompoundPoint> {
        project(&self.params)
    }
}

/// Projects one point per year.
///
/// Every period (12 per year for monthly deposits, 1 for yearly) first adds
/// the deposit, then credits `balance * rate / 100 / periods` interest.
/// Values are carried at full precision between periods and rounded to cents
/// only when a yearly point is emitted. `years == 0` yields an empty series.
#[must_use]
pub fn project(params: &CompoundParameters) -> Vec<CompoundPoint> {
    let periods = params.deposit_frequency.periods_per_year();
    let periods_f = f64::from(periods);

    let mut points = Vec::with_capacity(params.years as usize);
    let mut balance = params.principal;
    let mut cumulative_deposit = params.principal;

    for year in 1..=params.years {
        for _ in 0..periods {
            balance += params.recurring_deposit;
            balance += balance * params.annual_rate_percent / 100.0 / periods_f;
            cumulative_deposit += params.recurring_deposit;
        }
        points.push(CompoundPoint {
            year,
            balance: round_cents(balance),
            cumulative_deposit: round_cents(cumulative_deposit),
        });
    }

    debug!(
        years = params.years,
        frequency = %params.deposit_frequency,
        "Compound projection complete"
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use fin_planner_domain::enums::DepositFrequency;
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal_macros::dec;

    fn to_dec(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap()
    }

    #[test]
    fn test_single_year_yearly() {
        let params = CompoundParameters::new(1000.0, 5.0, 1)
            .with_deposit(0.0, DepositFrequency::Yearly);
        let points = project(&params);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 1);
        assert_eq!(to_dec(points[0].balance), dec!(1050.00));
        assert_eq!(to_dec(points[0].cumulative_deposit), dec!(1000.00));
    }

    #[test]
    fn test_yearly_compounding_over_years() {
        let params = CompoundParameters::new(1000.0, 5.0, 3)
            .with_deposit(0.0, DepositFrequency::Yearly);
        let points = project(&params);

        let balances: Vec<_> = points.iter().map(|p| to_dec(p.balance)).collect();
        assert_eq!(balances, vec![dec!(1050), dec!(1102.5), dec!(1157.63)]);
    }

    #[test]
    fn test_monthly_compounding() {
        let params = CompoundParameters::new(1000.0, 12.0, 1);
        let points = project(&params);

        // 1000 * 1.01^12
        assert_eq!(to_dec(points[0].balance), dec!(1126.83));
    }

    #[test]
    fn test_deposit_is_added_before_interest() {
        let params =
            CompoundParameters::new(0.0, 10.0, 1).with_deposit(100.0, DepositFrequency::Yearly);
        let points = project(&params);

        assert_eq!(to_dec(points[0].balance), dec!(110));
        assert_eq!(to_dec(points[0].cumulative_deposit), dec!(100));
    }

    #[test]
    fn test_monthly_deposits_without_interest() {
        let params =
            CompoundParameters::new(500.0, 0.0, 2).with_deposit(100.0, DepositFrequency::Monthly);
        let points = project(&params);

        assert_eq!(points[0].balance, 1700.0);
        assert_eq!(points[0].cumulative_deposit, 1700.0);
        assert_eq!(points[1].balance, 2900.0);
        assert_eq!(points[1].cumulative_deposit, 2900.0);
    }

    #[test]
    fn test_length_and_year_numbering() {
        let params = CompoundParameters::new(1000.0, 7.0, 25)
            .with_deposit(50.0, DepositFrequency::Monthly);
        let points = CompoundProjector::new(params).run();

        assert_eq!(points.len(), 25);
        assert!(points.iter().enumerate().all(|(i, p)| p.year == i as u32 + 1));
        assert!(points.windows(2).all(|w| w[1].cumulative_deposit >= w[0].cumulative_deposit));
    }

    #[test]
    fn test_zero_years_is_empty() {
        let params = CompoundParameters::new(1000.0, 5.0, 0);
        assert!(project(&params).is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = CompoundParameters::new(1234.56, 6.5, 30)
            .with_deposit(77.7, DepositFrequency::Monthly);

        let first: Vec<u64> = project(&params).iter().map(|p| p.balance.to_bits()).collect();
        let second: Vec<u64> = project(&params).iter().map(|p| p.balance.to_bits()).collect();
        assert_eq!(first, second);
    }
}
