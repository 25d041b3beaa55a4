// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERIC_PRESSURE: f64 = 100_000.0; // Pa

// Simulation Parameters
pub const SIMULATION_START: f64 = 0.0; // s
pub const SIMULATION_END: f64 = 20.0; // s

// Reporting
pub const TARGET_ALTITUDE: f64 = 50.0; // m
