pub mod summary;

pub use summary::SeriesSummary;
