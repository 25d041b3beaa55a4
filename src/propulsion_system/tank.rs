use crate::errors::SimulationError;
use crate::grid::TimeGrid;
use crate::parameters::{ModelConfig, SimulationParameters};
use crate::utils::integrate::cumulative_trapezoid;

/// Tank pressure for each volume sample: P(V) = P0 · (V0 / V).
///
/// The gas cushion expands isothermally as fluid leaves, so pressure falls
/// inversely with the volume it occupies. Volumes must already be floored;
/// a non-positive sample means the configured floor let one through and the
/// run is aborted instead of feeding NaN downstream.
pub fn pressure_series(
    params: &SimulationParameters,
    volumes: &[f64],
) -> Result<Vec<f64>, SimulationError> {
    let mut pressures = Vec::with_capacity(volumes.len());

    for &volume in volumes {
        if !(volume > 0.0) {
            return Err(SimulationError::NonPhysicalInput(format!(
                "tank volume must stay strictly positive, got {} m³",
                volume
            )));
        }
        pressures.push(params.initial_tank_pressure * params.initial_gas_volume / volume);
    }

    Ok(pressures)
}

/// Remaining fluid volume over time, clamped at the configured floor.
///
/// V(t) = max(V10 − A · ∫₀ᵗ c dτ, floor), with the outflow integral taken as
/// a running trapezoid over the grid.
pub fn depleted_volume_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    grid: &TimeGrid,
    exit_velocities: &[f64],
) -> Result<Vec<f64>, SimulationError> {
    let floor = config.resolve_volume_floor(params)?;
    let area = params.nozzle_area();
    let outflow = cumulative_trapezoid(exit_velocities, grid.samples());

    Ok(outflow
        .iter()
        .map(|&expelled| (params.initial_fluid_volume - area * expelled).max(floor))
        .collect())
}
