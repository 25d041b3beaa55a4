use crate::grid::TimeGrid;
use crate::utils::integrate::cumulative_trapezoid;

/// Rocket velocity: running trapezoidal integral of the acceleration,
/// pinned to 0 at the first sample.
pub fn velocity_series(grid: &TimeGrid, accelerations: &[f64]) -> Vec<f64> {
    cumulative_trapezoid(accelerations, grid.samples())
}

/// Height above the launch point: running trapezoidal integral of the
/// velocity, pinned to 0 at the first sample.
pub fn height_series(grid: &TimeGrid, velocities: &[f64]) -> Vec<f64> {
    cumulative_trapezoid(velocities, grid.samples())
}
