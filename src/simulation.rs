use crate::errors::SimulationError;
use crate::grid::TimeGrid;
use crate::parameters::{ModelConfig, SimulationParameters};
use crate::propulsion_system::{nozzle, tank};
use crate::trajectory_system::{dynamics, kinematics};

/// One value per time sample for every derived quantity of the flight.
///
/// All sequences share the grid length; index 0 reflects the initial
/// conditions (height and velocity zero, tank fully charged). Nothing here is
/// mutated after `FlightSimulation::run` returns the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSeries {
    pub time: Vec<f64>,            // s
    pub tank_pressure: Vec<f64>,   // Pa
    pub exit_velocity: Vec<f64>,   // m/s
    pub fluid_volume: Vec<f64>,    // m³
    pub volumetric_flow: Vec<f64>, // m³/s
    pub mass_flow: Vec<f64>,       // kg/s
    pub mass: Vec<f64>,            // kg
    pub thrust: Vec<f64>,          // N
    pub acceleration: Vec<f64>,    // m/s²
    pub velocity: Vec<f64>,        // m/s
    pub height: Vec<f64>,          // m
}

impl StateSeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// First grid time at which the height reaches `target_altitude`,
    /// or `None` when the rocket never gets there within the grid.
    pub fn time_to_altitude(&self, target_altitude: f64) -> Option<f64> {
        self.height
            .iter()
            .position(|&h| h >= target_altitude)
            .map(|index| self.time[index])
    }

    /// Peak height over the whole series. Non-finite samples are treated as
    /// absent, never as the reported maximum.
    pub fn max_height(&self) -> f64 {
        self.height
            .iter()
            .copied()
            .filter(|h| h.is_finite())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn summarize(&self, target_altitude: f64) -> SummaryResult {
        SummaryResult {
            time_to_target: self.time_to_altitude(target_altitude),
            max_height: self.max_height(),
        }
    }
}

/// The two scalars reported after a run. `time_to_target` is `None` when the
/// target altitude is never reached; that is an answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryResult {
    pub time_to_target: Option<f64>,
    pub max_height: f64,
}

/// A single deterministic batch computation over a pre-sized time grid.
///
/// Construction validates the parameter set; `run` derives the full state
/// bundle. There is no shared state between runs, so re-running with the same
/// inputs reproduces the output exactly.
pub struct FlightSimulation {
    params: SimulationParameters,
    config: ModelConfig,
    grid: TimeGrid,
}

impl FlightSimulation {
    pub fn new(
        params: SimulationParameters,
        config: ModelConfig,
        grid: TimeGrid,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        config.resolve_volume_floor(&params)?;

        Ok(FlightSimulation {
            params,
            config,
            grid,
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Runs the forward derivation chain.
    ///
    /// Exit velocity depends on pressure, pressure on remaining volume, and
    /// volume on the cumulative exit velocity. The cycle is resolved with a
    /// single corrective pass: a zero-velocity seed gives a coarse volume,
    /// pressure and exit velocity are derived from it, and the volume is then
    /// recomputed once with the real velocities. Pressure and velocity are
    /// deliberately not updated a second time.
    pub fn run(&self) -> Result<StateSeries, SimulationError> {
        let params = &self.params;
        let config = &self.config;
        let grid = &self.grid;

        let seed_velocity = vec![0.0; grid.len()];
        let coarse_volume = tank::depleted_volume_series(params, config, grid, &seed_velocity)?;

        let tank_pressure = tank::pressure_series(params, &coarse_volume)?;
        let exit_velocity = nozzle::exit_velocity_series(params, config, &tank_pressure);

        let fluid_volume = tank::depleted_volume_series(params, config, grid, &exit_velocity)?;

        let volumetric_flow = nozzle::volumetric_flow_series(params, &exit_velocity);
        let mass_flow = nozzle::mass_flow_series(params, config, &volumetric_flow);
        let mass = dynamics::mass_series(params, config, grid, &volumetric_flow, &mass_flow);
        let thrust = dynamics::thrust_series(params, config, &mass_flow, &exit_velocity, &mass);
        let acceleration = dynamics::acceleration_series(params, config, &thrust, &mass);
        let velocity = kinematics::velocity_series(grid, &acceleration);
        let height = kinematics::height_series(grid, &velocity);

        Ok(StateSeries {
            time: grid.samples().to_vec(),
            tank_pressure,
            exit_velocity,
            fluid_volume,
            volumetric_flow,
            mass_flow,
            mass,
            thrust,
            acceleration,
            velocity,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn high_pressure_run(sample_count: usize) -> StateSeries {
        let simulation = FlightSimulation::new(
            SimulationParameters::high_pressure_demo(),
            ModelConfig::classic(),
            TimeGrid::new(0.0, 20.0, sample_count).unwrap(),
        )
        .unwrap();
        simulation.run().unwrap()
    }

    #[test]
    fn test_all_series_share_the_grid_length() {
        let series = high_pressure_run(500);

        assert_eq!(series.len(), 500);
        for len in [
            series.tank_pressure.len(),
            series.exit_velocity.len(),
            series.fluid_volume.len(),
            series.volumetric_flow.len(),
            series.mass_flow.len(),
            series.mass.len(),
            series.thrust.len(),
            series.acceleration.len(),
            series.velocity.len(),
            series.height.len(),
        ] {
            assert_eq!(len, 500);
        }
    }

    #[test]
    fn test_initial_conditions_at_index_zero() {
        let series = high_pressure_run(500);
        let params = SimulationParameters::high_pressure_demo();

        assert_eq!(series.height[0], 0.0);
        assert_eq!(series.velocity[0], 0.0);
        assert_relative_eq!(
            series.fluid_volume[0],
            params.initial_fluid_volume,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rerun_is_bit_identical() {
        let first = high_pressure_run(2000);
        let second = high_pressure_run(2000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_sample_boundary_grid() {
        let series = high_pressure_run(2);
        assert_eq!(series.len(), 2);
        assert_eq!(series.height[0], 0.0);
        assert!(series.height[1].is_finite());
    }

    #[test]
    fn test_volume_respects_floor_through_the_full_pipeline() {
        let params = SimulationParameters::high_pressure_demo();
        let config = ModelConfig::classic();
        let floor = config.resolve_volume_floor(&params).unwrap();

        let series = high_pressure_run(5000);
        for &v in &series.fluid_volume {
            assert!(v >= floor);
        }
    }

    #[test]
    fn test_pressure_series_is_finite_and_non_negative() {
        let series = high_pressure_run(5000);
        for &p in &series.tank_pressure {
            assert!(p.is_finite());
            assert!(p >= 0.0);
        }
    }

    #[test]
    fn test_time_to_altitude_picks_first_crossing() {
        let mut series = high_pressure_run(5);
        series.time = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        series.height = vec![0.0, 10.0, 60.0, 55.0, 70.0];

        assert_eq!(series.time_to_altitude(50.0), Some(2.0));
        assert_eq!(series.time_to_altitude(100.0), None);
    }

    #[test]
    fn test_max_height_ignores_non_finite_samples() {
        let mut series = high_pressure_run(5);
        series.height = vec![0.0, 12.0, f64::NAN, f64::INFINITY, 7.0];

        assert_relative_eq!(series.max_height(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_is_consistent_with_the_series() {
        let series = high_pressure_run(2000);
        let summary = series.summarize(50.0);

        assert_eq!(summary.time_to_target, series.time_to_altitude(50.0));
        assert_relative_eq!(summary.max_height, series.max_height(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut params = SimulationParameters::high_pressure_demo();
        params.air_density = 0.0;

        let result = FlightSimulation::new(
            params,
            ModelConfig::classic(),
            TimeGrid::new(0.0, 20.0, 100).unwrap(),
        );
        assert!(matches!(
            result,
            Err(SimulationError::NonPhysicalInput(_))
        ));
    }
}
