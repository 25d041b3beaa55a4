use std::path::Path;

use water_rocket_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = SimulationParameters::high_pressure_demo();
    let config = ModelConfig::classic();
    let grid = TimeGrid::new(SIMULATION_START, SIMULATION_END, 200_000)?;

    let simulation = FlightSimulation::new(params, config, grid)?;
    let series = simulation.run()?;
    let summary = series.summarize(TARGET_ALTITUDE);

    let report = FlightReport::new(&series, &summary, TARGET_ALTITUDE);
    report.display();

    render_height_curve(&series, TARGET_ALTITUDE, Path::new("height.png"))?;
    write_height_csv(&series, Path::new("height.csv"))?;

    Ok(())
}
