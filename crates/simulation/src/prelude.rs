//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use fin_planner_simulation::prelude::*;
//! ```

// Compound projection
pub use crate::compound::{CompoundProjector, project};

// Historical simulation
pub use crate::historical::{HistoricalSimulator, simulate};

// Resampling
pub use crate::resample::{aggregate_price, resample};

// Draft/commit staging
pub use crate::staging::ParameterStage;

// Window validation
pub use crate::validation::{MAX_YEAR_GAP, RangeWarning, validate_range};
