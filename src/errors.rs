use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Non-physical input: {0}")]
    NonPhysicalInput(String),

    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),
}
