use std::f64::consts::PI;

use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERIC_PRESSURE, GRAVITY};
use crate::errors::SimulationError;

/// Fixed physical and geometric inputs for one simulation run.
///
/// All values are strictly positive; `validate` rejects anything else.
/// The nozzle cross-sectional area is derived from the radius and never
/// stored as an independent input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub air_density: f64,           // kg/m³
    pub gravity: f64,               // m/s²
    pub initial_gas_volume: f64,    // m³
    pub dry_mass: f64,              // kg
    pub fluid_density: f64,         // kg/m³
    pub nozzle_radius: f64,         // m
    pub discharge_factor: f64,      // dimensionless
    pub nozzle_length: f64,         // m
    pub atmospheric_pressure: f64,  // Pa
    pub initial_tank_pressure: f64, // Pa
    pub initial_fluid_volume: f64,  // m³
}

impl SimulationParameters {
    /// High-pressure bench configuration: a tiny gas cushion behind a
    /// 5 MPa charge pushing through a 15 mm nozzle.
    pub fn high_pressure_demo() -> Self {
        SimulationParameters {
            air_density: AIR_DENSITY_SEA_LEVEL,
            gravity: GRAVITY,
            initial_gas_volume: 0.0001,
            dry_mass: 10.0,
            fluid_density: 1.0,
            nozzle_radius: 0.015,
            discharge_factor: 1.0,
            nozzle_length: 0.06,
            atmospheric_pressure: ATMOSPHERIC_PRESSURE,
            initial_tank_pressure: 5_000_000.0,
            initial_fluid_volume: 0.0002,
        }
    }

    /// Low-pressure bench configuration: a large tank drained through a
    /// narrow 5 mm nozzle.
    pub fn low_pressure_demo() -> Self {
        SimulationParameters {
            initial_gas_volume: 1.0,
            nozzle_radius: 0.005,
            initial_fluid_volume: 2.0,
            ..Self::high_pressure_demo()
        }
    }

    pub fn nozzle_area(&self) -> f64 {
        PI * self.nozzle_radius.powi(2)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("air density", self.air_density),
            ("gravity", self.gravity),
            ("initial gas volume", self.initial_gas_volume),
            ("dry mass", self.dry_mass),
            ("fluid density", self.fluid_density),
            ("nozzle radius", self.nozzle_radius),
            ("discharge factor", self.discharge_factor),
            ("nozzle length", self.nozzle_length),
            ("atmospheric pressure", self.atmospheric_pressure),
            ("initial tank pressure", self.initial_tank_pressure),
            ("initial fluid volume", self.initial_fluid_volume),
        ];

        for (name, value) in fields {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimulationError::NonPhysicalInput(format!(
                    "{} must be strictly positive and finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// How the gravitational deceleration enters the force balance.
///
/// The two demo configurations disagree here; both readings keep gravity in
/// the net acceleration exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityMode {
    /// Weight is subtracted from the momentum thrust: F = ṁ·c − g·m, a = F/m.
    FoldedIntoThrust,
    /// Thrust stays pure momentum flux: F = ṁ·c, a = F/m − g.
    SeparateAcceleration,
}

/// How the instantaneous rocket mass is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassModel {
    /// m(t) = b·(V10 − V̇(t)·t) + mr, evaluated per sample. Not monotonic.
    Pointwise,
    /// m(t) = mr + (b·V10 − ∫ṁ dτ). Monotonic by construction.
    Integrated,
}

/// Whether the nozzle area is applied once or twice in the mass flow rate.
///
/// `AreaWeighted` multiplies the area in a second time (ṁ = V̇·b·A). Its
/// physical derivation is doubtful but it is kept selectable rather than
/// silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassFlowScaling {
    Linear,
    AreaWeighted,
}

/// Whether the 2·g·L nozzle head term contributes to the exit velocity.
///
/// With the term included the exit velocity keeps a small positive floor even
/// once tank pressure has decayed below ambient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NozzleHead {
    Included,
    Omitted,
}

/// Lower bound applied to the remaining fluid volume so the pressure relation
/// never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeFloor {
    /// Clamp at the initial gas volume.
    GasVolume,
    /// Clamp at a fixed, strictly positive volume in m³.
    Fixed(f64),
}

/// Named variant flags for the points where the two demo configurations
/// disagree on the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    pub gravity_mode: GravityMode,
    pub mass_model: MassModel,
    pub mass_flow_scaling: MassFlowScaling,
    pub nozzle_head: NozzleHead,
    pub volume_floor: VolumeFloor,
}

impl ModelConfig {
    /// The formula set used by the high-pressure bench.
    pub fn classic() -> Self {
        ModelConfig {
            gravity_mode: GravityMode::FoldedIntoThrust,
            mass_model: MassModel::Pointwise,
            mass_flow_scaling: MassFlowScaling::AreaWeighted,
            nozzle_head: NozzleHead::Included,
            volume_floor: VolumeFloor::GasVolume,
        }
    }

    /// The revised formula set: gravity as a separate deceleration, monotonic
    /// mass depletion, single area factor in the mass flow, overpressure-only
    /// exit velocity.
    pub fn revised() -> Self {
        ModelConfig {
            gravity_mode: GravityMode::SeparateAcceleration,
            mass_model: MassModel::Integrated,
            mass_flow_scaling: MassFlowScaling::Linear,
            nozzle_head: NozzleHead::Omitted,
            volume_floor: VolumeFloor::Fixed(1e-6),
        }
    }

    /// Resolves the configured floor against the parameter set.
    pub fn resolve_volume_floor(
        &self,
        params: &SimulationParameters,
    ) -> Result<f64, SimulationError> {
        let floor = match self.volume_floor {
            VolumeFloor::GasVolume => params.initial_gas_volume,
            VolumeFloor::Fixed(value) => value,
        };

        if !(floor > 0.0) || !floor.is_finite() {
            return Err(SimulationError::NonPhysicalInput(format!(
                "volume floor must be strictly positive and finite, got {} m³",
                floor
            )));
        }

        Ok(floor)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nozzle_area_is_derived_from_radius() {
        let params = SimulationParameters::high_pressure_demo();
        assert_relative_eq!(params.nozzle_area(), PI * 0.015 * 0.015, epsilon = 1e-12);

        let params = SimulationParameters::low_pressure_demo();
        assert_relative_eq!(params.nozzle_area(), PI * 0.005 * 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_demo_presets_are_valid() {
        assert!(SimulationParameters::high_pressure_demo().validate().is_ok());
        assert!(SimulationParameters::low_pressure_demo().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_inputs() {
        let mut params = SimulationParameters::high_pressure_demo();
        params.dry_mass = 0.0;
        assert!(params.validate().is_err(), "zero dry mass should be rejected");

        let mut params = SimulationParameters::high_pressure_demo();
        params.initial_tank_pressure = -5.0;
        assert!(
            params.validate().is_err(),
            "negative tank pressure should be rejected"
        );

        let mut params = SimulationParameters::high_pressure_demo();
        params.air_density = f64::NAN;
        assert!(params.validate().is_err(), "NaN density should be rejected");
    }

    #[test]
    fn test_volume_floor_resolution() {
        let params = SimulationParameters::high_pressure_demo();

        let config = ModelConfig::classic();
        let floor = config.resolve_volume_floor(&params).unwrap();
        assert_relative_eq!(floor, params.initial_gas_volume, epsilon = 1e-15);

        let config = ModelConfig {
            volume_floor: VolumeFloor::Fixed(1e-5),
            ..ModelConfig::classic()
        };
        assert_relative_eq!(
            config.resolve_volume_floor(&params).unwrap(),
            1e-5,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_volume_floor_must_be_positive() {
        let params = SimulationParameters::high_pressure_demo();
        let config = ModelConfig {
            volume_floor: VolumeFloor::Fixed(0.0),
            ..ModelConfig::classic()
        };
        assert!(
            config.resolve_volume_floor(&params).is_err(),
            "a zero floor would let the pressure relation divide by zero"
        );

        let config = ModelConfig {
            volume_floor: VolumeFloor::Fixed(-1e-4),
            ..ModelConfig::classic()
        };
        assert!(config.resolve_volume_floor(&params).is_err());
    }
}
