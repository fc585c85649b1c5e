//! Boundary towards chart renderers.
//!
//! The computation crates never draw anything. They hand a renderer a list
//! of [`ChartRow`]s (one x-axis label plus one value per series) and the
//! series names, and the renderer decides how to display them.

use crate::math::round_dp;
use crate::value_objects::series::{CompoundPoint, SimulationPoint};
use serde::{Deserialize, Serialize};

/// One x-axis position with a value for every series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// X-axis label.
    pub label: String,
    /// One value per series, in series order.
    pub values: Vec<f64>,
}

/// A point type that can be plotted.
pub trait ChartPoint {
    /// Series names, matching the order of [`ChartPoint::values`].
    const SERIES: &'static [&'static str];

    /// X-axis label of the point.
    fn label(&self) -> String;

    /// Series values of the point.
    fn values(&self) -> Vec<f64>;

    /// Converts the point into a chart row.
    fn to_row(&self) -> ChartRow {
        ChartRow {
            label: self.label(),
            values: self.values(),
        }
    }
}

impl ChartPoint for CompoundPoint {
    const SERIES: &'static [&'static str] = &["Balance", "Total Deposit"];

    fn label(&self) -> String {
        self.year.to_string()
    }

    fn values(&self) -> Vec<f64> {
        vec![self.balance, self.cumulative_deposit]
    }
}

impl ChartPoint for SimulationPoint {
    const SERIES: &'static [&'static str] = &["Portfolio Value", "Total Deposited"];

    fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    fn values(&self) -> Vec<f64> {
        vec![self.portfolio_value, self.cumulative_deposit]
    }
}

/// A renderer consuming chart rows.
pub trait ChartSink {
    /// Error raised by the renderer.
    type Error;

    /// Renders `rows` for the named `series`.
    fn render(&mut self, series: &[&str], rows: &[ChartRow]) -> Result<(), Self::Error>;
}

/// Converts a series into chart rows.
#[must_use]
pub fn chart_rows<P: ChartPoint>(points: &[P]) -> Vec<ChartRow> {
    points.iter().map(ChartPoint::to_row).collect()
}

/// Renders a series through `sink` using the point type's series names.
pub fn render_series<P, S>(sink: &mut S, points: &[P]) -> Result<(), S::Error>
where
    P: ChartPoint,
    S: ChartSink,
{
    sink.render(P::SERIES, &chart_rows(points))
}

/// Formats a y-axis tick value.
///
/// Billions and millions keep one decimal (`1.5B`, `2.3M`), thousands none
/// (`12K`), smaller values are printed as-is. Exact halves round away from
/// zero (`12_500` is `13K`).
#[must_use]
pub fn format_tick(value: f64) -> String {
    // `{:.N}` alone rounds ties to even
    if value >= 1_000_000_000.0 {
        format!("{:.1}B", round_dp(value / 1_000_000_000.0, 1))
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", round_dp(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{:.0}K", round_dp(value / 1_000.0, 0))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct RecordingSink {
        series: Vec<String>,
        rows: Vec<ChartRow>,
    }

    impl ChartSink for RecordingSink {
        type Error = ();

        fn render(&mut self, series: &[&str], rows: &[ChartRow]) -> Result<(), ()> {
            self.series = series.iter().map(|s| s.to_string()).collect();
            self.rows = rows.to_vec();
            Ok(())
        }
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(2_345_000_000.0), "2.3B");
        assert_eq!(format_tick(1_000_000_000.0), "1.0B");
        assert_eq!(format_tick(12_340_000.0), "12.3M");
        assert_eq!(format_tick(12_340.0), "12K");
        assert_eq!(format_tick(1_000.0), "1K");
        assert_eq!(format_tick(999.0), "999");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(-5000.0), "-5000");
    }

    #[test]
    fn test_format_tick_rounds_halves_up() {
        assert_eq!(format_tick(12_500.0), "13K");
        assert_eq!(format_tick(2_500.0), "3K");
        assert_eq!(format_tick(1_250_000.0), "1.3M");
        assert_eq!(format_tick(2_250_000_000.0), "2.3B");
    }

    #[test]
    fn test_compound_rows() {
        let point = CompoundPoint {
            year: 3,
            balance: 1157.63,
            cumulative_deposit: 1000.0,
        };
        let row = point.to_row();

        assert_eq!(row.label, "3");
        assert_eq!(row.values, vec![1157.63, 1000.0]);
    }

    #[test]
    fn test_render_simulation_series() {
        let points = vec![SimulationPoint {
            date: NaiveDate::from_ymd_opt(2020, 3, 5).unwrap(),
            shares: 10.0,
            portfolio_value: 1000.0,
            cumulative_deposit: 1000.0,
        }];
        let mut sink = RecordingSink::default();

        render_series(&mut sink, &points).unwrap();

        assert_eq!(sink.series, vec!["Portfolio Value", "Total Deposited"]);
        assert_eq!(sink.rows.len(), 1);
        assert_eq!(sink.rows[0].label, "2020-03-05");
    }
}
