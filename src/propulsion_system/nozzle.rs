use crate::parameters::{MassFlowScaling, ModelConfig, NozzleHead, SimulationParameters};

/// Bernoulli exit velocity for each pressure sample.
///
/// c(P) = sqrt(2·g·L + 2·max(P − Pa, 0)/ρ) with the nozzle head term, or
/// sqrt(2·max(P − Pa, 0)/ρ) without it. The max(·, 0) guard keeps the root
/// real once tank pressure has decayed below ambient, so the function is
/// total over any pressure input.
pub fn exit_velocity_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    pressures: &[f64],
) -> Vec<f64> {
    let head = match config.nozzle_head {
        NozzleHead::Included => 2.0 * params.gravity * params.nozzle_length,
        NozzleHead::Omitted => 0.0,
    };

    pressures
        .iter()
        .map(|&pressure| {
            let overpressure = (pressure - params.atmospheric_pressure).max(0.0);
            (head + 2.0 * overpressure / params.air_density).sqrt()
        })
        .collect()
}

/// Volumetric flow rate through the nozzle: V̇ = A · c.
pub fn volumetric_flow_series(params: &SimulationParameters, exit_velocities: &[f64]) -> Vec<f64> {
    let area = params.nozzle_area();
    exit_velocities.iter().map(|&c| area * c).collect()
}

/// Mass flow rate: ṁ = V̇·b, or V̇·b·A in the area-weighted variant.
pub fn mass_flow_series(
    params: &SimulationParameters,
    config: &ModelConfig,
    volumetric_flow: &[f64],
) -> Vec<f64> {
    let scale = match config.mass_flow_scaling {
        MassFlowScaling::Linear => params.fluid_density,
        MassFlowScaling::AreaWeighted => params.fluid_density * params.nozzle_area(),
    };

    volumetric_flow.iter().map(|&vdot| vdot * scale).collect()
}
