pub mod compound_parameters;
pub mod series;
pub mod simulation_parameters;

pub use compound_parameters::CompoundParameters;
pub use series::{CompoundPoint, ResampledPoint, SeriesPoint, SimulationPoint};
pub use simulation_parameters::SimulationParameters;
