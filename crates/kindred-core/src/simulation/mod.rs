//! Simulation domain module.
//!
//! Typed view over `simulation` records and the partial updates the
//! conversation flow writes to them.

mod model;

// Re-export public API
pub use model::{Simulation, SimulationStatus, field};
