//! Domain types for the financial planner.
//!
//! This crate holds the value types shared by the simulation, data and CLI
//! crates:
//! - Price records ingested from a price-history file
//! - Simulation and projection parameters
//! - Output series points and their summaries
//! - The chart-rendering boundary

/// Chart rendering boundary.
pub mod chart;
/// Price records.
pub mod entities;
/// Period, policy and frequency enums.
pub mod enums;
/// Numeric helpers.
pub mod math;
/// Series metrics.
pub mod metrics;
/// Parameters and series points.
pub mod value_objects;

pub use chart::{ChartPoint, ChartRow, ChartSink, format_tick};
pub use entities::PriceRecord;
pub use enums::{DepositFrequency, PricePolicy, ResamplePeriod};
pub use metrics::SeriesSummary;
pub use value_objects::{
    CompoundParameters, CompoundPoint, ResampledPoint, SeriesPoint, SimulationParameters,
    SimulationPoint,
};
