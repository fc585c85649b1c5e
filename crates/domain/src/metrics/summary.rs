use crate::value_objects::series::SeriesPoint;
use serde::{Deserialize, Serialize};

/// Headline numbers of a value-vs-deposit series, taken at its last point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of points in the series.
    pub points: usize,
    /// Value at the last point.
    pub final_value: f64,
    /// Capital contributed by the last point.
    pub total_deposited: f64,
    /// `final_value - total_deposited`.
    pub gain: f64,
    /// Gain as a fraction of the deposits; `None` when nothing was deposited.
    pub return_pct: Option<f64>,
}

impl SeriesSummary {
    /// Summarizes a series. Returns `None` for an empty series.
    #[must_use]
    pub fn from_series<P: SeriesPoint>(series: &[P]) -> Option<Self> {
        let last = series.last()?;
        let final_value = last.value();
        let total_deposited = last.deposited();
        let gain = final_value - total_deposited;
        let return_pct = (total_deposited != 0.0).then(|| gain / total_deposited);

        Some(Self {
            points: series.len(),
            final_value,
            total_deposited,
            gain,
            return_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::series::{CompoundPoint, SimulationPoint};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_series() {
        let series: Vec<CompoundPoint> = Vec::new();
        assert!(SeriesSummary::from_series(&series).is_none());
    }

    #[test]
    fn test_compound_summary() {
        let series = vec![
            CompoundPoint {
                year: 1,
                balance: 1050.0,
                cumulative_deposit: 1000.0,
            },
            CompoundPoint {
                year: 2,
                balance: 1102.5,
                cumulative_deposit: 1000.0,
            },
        ];

        let summary = SeriesSummary::from_series(&series).unwrap();
        assert_eq!(summary.points, 2);
        assert_eq!(summary.final_value, 1102.5);
        assert!((summary.gain - 102.5).abs() < 1e-9);
        assert!((summary.return_pct.unwrap() - 0.1025).abs() < 1e-9);
    }

    #[test]
    fn test_zero_deposit_has_no_return_pct() {
        let series = vec![SimulationPoint {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            shares: 0.0,
            portfolio_value: 0.0,
            cumulative_deposit: 0.0,
        }];

        let summary = SeriesSummary::from_series(&series).unwrap();
        assert_eq!(summary.return_pct, None);
    }
}
