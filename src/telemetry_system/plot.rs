use std::error::Error;
use std::fs;
use std::path::Path;

use csv::Writer;
use plotters::prelude::*;

use crate::simulation::StateSeries;

const IMAGE_SIZE: (u32, u32) = (1200, 800);

/// Renders the height-vs-time curve to a PNG, with a horizontal marker at the
/// target altitude.
///
/// The vertical axis is capped at 1.1× the peak height when that peak is
/// finite and positive; otherwise the frame falls back to the target marker.
pub fn render_height_curve(
    series: &StateSeries,
    target_altitude: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let t_end = series
        .time
        .last()
        .copied()
        .ok_or("cannot plot an empty state series")?;
    let max_height = series.max_height();

    let y_max = if max_height.is_finite() && max_height > 0.0 {
        (max_height * 1.1).max(target_altitude * 1.1)
    } else {
        target_altitude * 1.1
    };

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Water rocket height", ("sans-serif", 36).into_font())
        .margin(20)
        .x_label_area_size(48)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_end, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("time t [s]")
        .y_desc("height h [m]")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series
                .time
                .iter()
                .copied()
                .zip(series.height.iter().copied()),
            ShapeStyle::from(&RED).stroke_width(2),
        ))?
        .label("height h(t) [m]")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            [(0.0, target_altitude), (t_end, target_altitude)],
            &MAGENTA,
        ))?
        .label(format!("{:.0} m mark", target_altitude))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &MAGENTA));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Writes the time/height series as CSV records next to the rendered curve.
pub fn write_height_csv(series: &StateSeries, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["time", "height"])?;

    for (&t, &h) in series.time.iter().zip(series.height.iter()) {
        writer.write_record([t.to_string(), h.to_string()])?;
    }

    let data = String::from_utf8(writer.into_inner()?)?;
    fs::write(path, data)?;

    Ok(())
}
