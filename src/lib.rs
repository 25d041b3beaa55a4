pub mod constants;
pub mod errors;
pub mod grid;
pub mod parameters;
pub mod propulsion_system;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;
pub use grid::TimeGrid;
pub use parameters::{
    GravityMode, MassFlowScaling, MassModel, ModelConfig, NozzleHead, SimulationParameters,
    VolumeFloor,
};
pub use simulation::{FlightSimulation, StateSeries, SummaryResult};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::plot::{render_height_curve, write_height_csv};
pub use telemetry_system::report::FlightReport;

// Re-export commonly used utilities
pub use utils::integrate::cumulative_trapezoid;
