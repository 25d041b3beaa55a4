use crate::grid::TimeGrid;
use crate::parameters::{GravityMode, MassModel, ModelConfig, SimulationParameters};
use crate::utils::integrate::cumulative_trapezoid;

/// Instantaneous rocket mass per sample.
///
/// Pointwise evaluates b·(V10 − V̇(t)·t) + mr directly; Integrated depletes
/// the propellant mass through the running integral of ṁ. Either way the
/// result is clamped at the dry mass, so the force balance never divides by
/// a vanishing mass.
pub fn mass_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    grid: &TimeGrid,
    volumetric_flow: &[f64],
    mass_flow: &[f64],
) -> Vec<f64> {
    let dry_mass = params.dry_mass;
    let propellant_mass = params.fluid_density * params.initial_fluid_volume;

    match config.mass_model {
        MassModel::Pointwise => grid
            .samples()
            .iter()
            .zip(volumetric_flow.iter())
            .map(|(&t, &vdot)| {
                let fluid = params.fluid_density * (params.initial_fluid_volume - vdot * t);
                (fluid + dry_mass).max(dry_mass)
            })
            .collect(),
        MassModel::Integrated => {
            let expelled = cumulative_trapezoid(mass_flow, grid.samples());
            expelled
                .iter()
                .map(|&out| (dry_mass + (propellant_mass - out)).max(dry_mass))
                .collect()
        }
    }
}

/// Thrust per sample.
///
/// The momentum flux is ṁ·c; in the folded variant the weight g·m is
/// subtracted here, in the separate variant it is applied in the
/// acceleration instead. Gravity enters the pipeline exactly once.
pub fn thrust_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    mass_flow: &[f64],
    exit_velocities: &[f64],
    masses: &[f64],
) -> Vec<f64> {
    match config.gravity_mode {
        GravityMode::FoldedIntoThrust => mass_flow
            .iter()
            .zip(exit_velocities.iter())
            .zip(masses.iter())
            .map(|((&mdot, &c), &m)| mdot * c - params.gravity * m)
            .collect(),
        GravityMode::SeparateAcceleration => mass_flow
            .iter()
            .zip(exit_velocities.iter())
            .map(|(&mdot, &c)| mdot * c)
            .collect(),
    }
}

/// Net acceleration per sample: thrust over mass, minus the gravitational
/// deceleration when it was not already folded into the thrust.
pub fn acceleration_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    thrusts: &[f64],
    masses: &[f64],
) -> Vec<f64> {
    match config.gravity_mode {
        GravityMode::FoldedIntoThrust => thrusts
            .iter()
            .zip(masses.iter())
            .map(|(&f, &m)| f / m)
            .collect(),
        GravityMode::SeparateAcceleration => thrusts
            .iter()
            .zip(masses.iter())
            .map(|(&f, &m)| f / m - params.gravity)
            .collect(),
    }
}
