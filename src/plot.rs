//! SVG charts for convergence traces, tours and sampled curves.
//!
//! Rendering is a pure side effect on the output file; nothing here feeds
//! back into a run. Enabled with the `plot` feature.

use crate::error::{Error, Result};
use crate::ga::ConvergenceTrace;
use crate::scan::ScanPoint;
use crate::tsp::Point;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (1000, 600);

fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

/// Value range padded so that flat series still get a visible band.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1e-9);
    (lo - pad, hi + pad)
}

/// Plots best and average fitness per generation.
pub fn draw_convergence(trace: &ConvergenceTrace, title: &str, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let (lo, hi) = padded_range(trace.best().iter().chain(trace.average()).copied());
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0..trace.len().max(1), lo..hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Fitness")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            trace.best().iter().copied().enumerate(),
            RED.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Best fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(
            trace.average().iter().copied().enumerate(),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("Average fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

/// Plots a closed tour with numbered cities.
pub fn draw_route(cities: &[Point], route: &[usize], title: &str, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_lo, x_hi) = padded_range(cities.iter().map(|c| c.x));
    let (y_lo, y_hi) = padded_range(cities.iter().map(|c| c.y));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(plot_err)?;

    chart.configure_mesh().draw().map_err(plot_err)?;

    let closed = route
        .iter()
        .chain(route.first())
        .filter_map(|&i| cities.get(i))
        .map(|c| (c.x, c.y));
    chart
        .draw_series(LineSeries::new(closed, BLUE.stroke_width(2)))
        .map_err(plot_err)?;

    chart
        .draw_series(cities.iter().enumerate().map(|(i, c)| {
            EmptyElement::at((c.x, c.y))
                + Circle::new((0, 0), 5, RED.filled())
                + Text::new(i.to_string(), (6, -14), ("sans-serif", 14).into_font())
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

/// Plots a sampled curve, optionally highlighting one point.
pub fn draw_curve(
    points: &[ScanPoint],
    marker: Option<ScanPoint>,
    title: &str,
    path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_lo, x_hi) = padded_range(points.iter().map(|p| p.x));
    let (y_lo, y_hi) = padded_range(points.iter().map(|p| p.y));
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.y)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_err)?;

    if let Some(m) = marker {
        chart
            .draw_series(std::iter::once(Circle::new((m.x, m.y), 6, RED.filled())))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)
}
