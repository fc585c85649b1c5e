//! Simulation engines for the financial planner.
//!
//! This crate provides:
//! - Historical buy-and-hold simulation over an ingested price history
//! - Compound-interest projection with recurring deposits
//! - Resampling of price records into daily, monthly or yearly buckets
//! - Draft/commit staging of user-edited parameters
//! - Advisory validation of simulation windows
//!
//! Every computation is a pure function of its inputs.

/// Prelude module for convenient imports.
pub mod prelude;

/// Compound-interest projection.
pub mod compound;
/// Historical purchase simulation.
pub mod historical;
/// Price resampling.
pub mod resample;
/// Draft/commit parameter staging.
pub mod staging;
/// Simulation window validation.
pub mod validation;
