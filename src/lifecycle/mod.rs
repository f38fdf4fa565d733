//! Session orchestration: starting, wiring and stopping the controllers.

pub mod plant_system;
pub mod tracing;

pub use plant_system::PlantSystem;
pub use tracing::setup_tracing;
