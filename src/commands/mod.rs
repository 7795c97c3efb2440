//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{ConsoleSurface, run_simple};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
