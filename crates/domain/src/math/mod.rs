pub mod rounding;

pub use rounding::{round_cents, round_dp};
