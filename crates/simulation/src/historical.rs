//! Historical buy-and-hold simulation.
//!
//! Replays a price history as a sequence of periodic purchases: the starting
//! capital buys shares at the first bucket price, then a fixed deposit buys
//! more shares at every following bucket.

use crate::resample::resample;
use chrono::NaiveDate;
use fin_planner_domain::entities::PriceRecord;
use fin_planner_domain::value_objects::{ResampledPoint, SimulationParameters, SimulationPoint};
use tracing::{debug, warn};

/// Simulates periodic purchases over a price history.
#[derive(Debug, Clone, Copy)]
pub struct HistoricalSimulator {
    params: SimulationParameters,
}

impl HistoricalSimulator {
    /// Creates a simulator for the given parameters.
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Returns the parameters the simulator runs with.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Runs the simulation over `records`, which must be sorted by date.
    #[must_use]
    pub fn run(&self, records: &[PriceRecord]) -> Vec<SimulationPoint> {
        simulate(records, &self.params)
    }
}

/// Keeps the records dated within `[start, end]`, in input order.
#[must_use]
pub fn filter_range(
    records: &[PriceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(NaiveDate, &PriceRecord)> {
    records
        .iter()
        .filter(|r| r.is_within(start, end))
        .filter_map(|r| r.date.map(|d| (d, r)))
        .collect()
}

/// Simulates purchases over a date-sorted price history.
///
/// # Arguments
/// * `records` - Price records sorted ascending by date
/// * `params` - Window, amounts, period and price policy
///
/// # Returns
/// One point per resampling bucket, in bucket order. An empty window yields
/// an empty series. Zero, negative or `NaN` bucket prices are not rejected:
/// they surface as non-finite share counts and values.
#[must_use]
pub fn simulate(records: &[PriceRecord], params: &SimulationParameters) -> Vec<SimulationPoint> {
    let window = filter_range(records, params.start_date, params.end_date);
    if window.is_empty() {
        debug!(
            records = records.len(),
            start = %params.start_date,
            end = %params.end_date,
            "No price records in simulation window"
        );
        return Vec::new();
    }

    let buckets = resample(&window, params.resample_period, params.price_policy);
    let unusable = buckets
        .iter()
        .filter(|b| !(b.price.is_finite() && b.price > 0.0))
        .count();
    if unusable > 0 {
        warn!(unusable, "Buckets with non-positive or non-finite prices");
    }

    let points = accumulate(&buckets, params.starting_capital, params.recurring_deposit);

    debug!(
        records = records.len(),
        in_window = window.len(),
        buckets = buckets.len(),
        period = %params.resample_period,
        policy = %params.price_policy,
        "Historical simulation complete"
    );

    points
}

/// Buys shares bucket by bucket and records the holding after each purchase.
#[must_use]
pub fn accumulate(
    buckets: &[ResampledPoint],
    starting_capital: f64,
    recurring_deposit: f64,
) -> Vec<SimulationPoint> {
    let Some((first, rest)) = buckets.split_first() else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(buckets.len());
    let mut shares = starting_capital / first.price;
    let mut cumulative_deposit = starting_capital;

    points.push(SimulationPoint {
        date: first.bucket_date,
        shares,
        portfolio_value: shares * first.price,
        cumulative_deposit,
    });

    for bucket in rest {
        shares += recurring_deposit / bucket.price;
        cumulative_deposit += recurring_deposit;
        points.push(SimulationPoint {
            date: bucket.bucket_date,
            shares,
            portfolio_value: shares * bucket.price,
            cumulative_deposit,
        });
    }

    points
}
