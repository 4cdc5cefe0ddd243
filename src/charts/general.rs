use std::path::Path;

use hashbrown::HashMap;
use plotters::{
    prelude::{BitMapBackend, Circle, EmptyElement, IntoDrawingArea},
    series::{AreaSeries, LineSeries, PointSeries},
    style::Color,
};

use super::{theme, CHART_DIMS};
use crate::{constants::CHART_IMAGE_FORMAT, utils::finite_range};

/// Padded y range, widened when the series is flat.
fn y_range(data: &[f64]) -> (f64, f64) {
    let (min, max) = finite_range(data).unwrap_or((0.0, 1.0));
    let pad = ((max - min) * 0.05).max(min.abs() * 0.01).max(1e-6);
    (min - pad, max + pad)
}

pub fn simple_chart(dir: &Path, name: &str, data: &[f64]) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(format!("{name}.{CHART_IMAGE_FORMAT}"));
    let root = BitMapBackend::new(&path, CHART_DIMS).into_drawing_area();
    root.fill(&theme::BASE)?;

    let (y_min, y_max) = y_range(data);

    let mut chart = plotters::chart::ChartBuilder::on(&root)
        .caption(name, ("sans-serif", 20, &theme::TEXT))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..data.len().max(1) as u32, y_min..y_max)?;

    chart
        .configure_mesh()
        .label_style(("sans-serif", 15, &theme::TEXT))
        .axis_style(theme::SURFACE1)
        .light_line_style(theme::SURFACE0)
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            data.iter()
                .enumerate()
                .map(|(index, value)| (index as u32, *value)),
            y_min,
            theme::BLUE.mix(0.2),
        )
        .border_style(theme::BLUE),
    )?;

    root.present()?;
    Ok(())
}

/// Price line with a marker on every tick spent long (green) or short (red).
pub fn position_chart(
    dir: &Path,
    prices: &[f64],
    long_ticks: &HashMap<usize, f64>,
    short_ticks: &HashMap<usize, f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(format!("positions.{CHART_IMAGE_FORMAT}"));
    let root = BitMapBackend::new(&path, CHART_DIMS).into_drawing_area();
    root.fill(&theme::BASE)?;

    let (y_min, y_max) = y_range(prices);

    let mut chart = plotters::chart::ChartBuilder::on(&root)
        .caption("Positions", ("sans-serif", 20, &theme::TEXT))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..prices.len().max(1) as u32, y_min..y_max)?;

    chart
        .configure_mesh()
        .label_style(("sans-serif", 15, &theme::TEXT))
        .axis_style(theme::SURFACE1)
        .light_line_style(theme::SURFACE0)
        .draw()?;

    chart.draw_series(LineSeries::new(
        prices
            .iter()
            .enumerate()
            .map(|(index, price)| (index as u32, *price)),
        &theme::BLUE,
    ))?;

    let point_size = 3;

    chart.draw_series(PointSeries::of_element(
        long_ticks.iter().map(|(tick, price)| (*tick as u32, *price)),
        point_size,
        theme::GREEN.mix(0.9).filled(),
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    chart.draw_series(PointSeries::of_element(
        short_ticks.iter().map(|(tick, price)| (*tick as u32, *price)),
        point_size,
        theme::RED.mix(0.9).filled(),
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_still_gets_a_range() {
        let (min, max) = y_range(&[5.0, 5.0]);
        assert!(min < 5.0 && max > 5.0);

        let (min, max) = y_range(&[]);
        assert!(min < max);
    }
}
