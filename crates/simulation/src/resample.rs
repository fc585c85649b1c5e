//! Resampling of price records into purchase buckets.
//!
//! Monthly and yearly buckets are built in an ordered map keyed by a derived
//! bucket key (`year * 100 + month`, or `year`). The map lives only for one
//! resampling call.

use chrono::{Datelike, NaiveDate};
use fin_planner_domain::entities::PriceRecord;
use fin_planner_domain::enums::{PricePolicy, ResamplePeriod};
use fin_planner_domain::value_objects::ResampledPoint;
use std::collections::BTreeMap;

/// Key identifying the bucket a date belongs to.
#[must_use]
pub fn bucket_key(date: NaiveDate, period: ResamplePeriod) -> Option<i32> {
    match period {
        ResamplePeriod::Daily => None,
        ResamplePeriod::Monthly => Some(date.year() * 100 + date.month() as i32),
        ResamplePeriod::Yearly => Some(date.year()),
    }
}

/// Resamples dated records into buckets sorted ascending by bucket date.
///
/// # Arguments
/// * `records` - Records in chronological order, paired with their dates
/// * `period` - Bucket granularity
/// * `policy` - Price field purchases are made at
///
/// # Returns
/// One point per bucket. Daily buckets keep the input order. Monthly and
/// yearly buckets are dated by their first record and priced by
/// [`aggregate_price`].
#[must_use]
pub fn resample(
    records: &[(NaiveDate, &PriceRecord)],
    period: ResamplePeriod,
    policy: PricePolicy,
) -> Vec<ResampledPoint> {
    if period == ResamplePeriod::Daily {
        return records
            .iter()
            .map(|(date, record)| ResampledPoint {
                bucket_date: *date,
                price: record.price(policy),
            })
            .collect();
    }

    let mut groups: BTreeMap<i32, Vec<(NaiveDate, &PriceRecord)>> = BTreeMap::new();
    for &(date, record) in records {
        if let Some(key) = bucket_key(date, period) {
            groups.entry(key).or_default().push((date, record));
        }
    }

    let mut points: Vec<ResampledPoint> = groups
        .values()
        .filter_map(|group| {
            let (bucket_date, _) = group.first()?;
            let members: Vec<&PriceRecord> = group.iter().map(|(_, r)| *r).collect();
            Some(ResampledPoint {
                bucket_date: *bucket_date,
                price: aggregate_price(&members, policy)?,
            })
        })
        .collect();

    points.sort_by_key(|p| p.bucket_date);
    points
}

/// Representative price of a bucket.
///
/// `Low` takes the minimum selected price and `High` the maximum. `Close`
/// takes the close of the chronologically last record: it is not an average
/// and not a min/max. A `NaN` price in a `Low`/`High` bucket makes the
/// bucket price `NaN`. Returns `None` for an empty bucket.
#[must_use]
pub fn aggregate_price(group: &[&PriceRecord], policy: PricePolicy) -> Option<f64> {
    let last = group.last()?;
    let prices = group.iter().map(|r| r.price(policy));
    let price = match policy {
        PricePolicy::Low => prices.fold(f64::INFINITY, nan_min),
        PricePolicy::High => prices.fold(f64::NEG_INFINITY, nan_max),
        PricePolicy::Close => last.close,
    };
    Some(price)
}

fn nan_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

fn nan_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}
