use crate::simulation::{StateSeries, SummaryResult};

/// Console summary of a finished run. Reads the state bundle once at
/// construction; displaying never recomputes anything.
pub struct FlightReport {
    target_altitude: f64,
    time_to_target: Option<f64>,
    max_height: f64,
    max_velocity: f64,
    max_acceleration: f64,
}

impl FlightReport {
    pub fn new(series: &StateSeries, summary: &SummaryResult, target_altitude: f64) -> Self {
        FlightReport {
            target_altitude,
            time_to_target: summary.time_to_target,
            max_height: summary.max_height,
            max_velocity: finite_max(&series.velocity),
            max_acceleration: finite_max(&series.acceleration),
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn target_line(&self) -> String {
        match self.time_to_target {
            Some(time) => format!(
                "Rocket reaches {:.0} m after {}",
                self.target_altitude,
                Self::format_time(time)
            ),
            None => format!(
                "Rocket does not reach {:.0} m within the simulated window",
                self.target_altitude
            ),
        }
    }

    pub fn display(&self) {
        println!("--- Flight Summary ---");
        println!("{}", self.target_line());
        println!("Max Height: {}", Self::format_altitude(self.max_height));
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
        println!("--- End of Summary ---");
    }
}

fn finite_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max)
}
