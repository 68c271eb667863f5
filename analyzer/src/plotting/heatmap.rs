//! Heat-map rendering shared by the TDP and TODP figures.

use std::path::Path;

use colorgrad::Gradient;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::analysis::binning::bin_edges;
use crate::models::{AnalysisError, AnalysisResult, Grid};
use crate::plotting::{wants_svg, FIGURE_SIZE};

/// Render an N×N grid as a colored heat map over [0,1]×[0,1], initial FRET
/// on x, final FRET on y, with a dashed white diagonal reference line.
pub fn plot_heat_map(grid: &Grid, value_label: &str, output: &Path) -> AnalysisResult<()> {
    if wants_svg(output) {
        let root = SVGBackend::new(output, FIGURE_SIZE).into_drawing_area();
        draw_heat_map(&root, grid, value_label)?;
        root.present()
            .map_err(|e| AnalysisError::Render(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output, FIGURE_SIZE).into_drawing_area();
        draw_heat_map(&root, grid, value_label)?;
        root.present()
            .map_err(|e| AnalysisError::Render(e.to_string()))?;
    }
    info!("Heat map saved to {}", output.display());
    Ok(())
}

fn draw_heat_map<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &Grid,
    value_label: &str,
) -> AnalysisResult<()> {
    let render_err = |e: DrawingAreaErrorKind<DB::ErrorType>| AnalysisError::Render(e.to_string());

    root.fill(&WHITE).map_err(render_err)?;

    let vmin = grid.iter().cloned().fold(f64::INFINITY, f64::min);
    let vmax = grid.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (vmax - vmin).max(f64::EPSILON);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{value_label} ({vmin:.2} to {vmax:.2})"),
            ("sans-serif bold", 24),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Initial FRET")
        .y_desc("Final FRET")
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(render_err)?;

    let num_bins = grid.nrows();
    let edges = bin_edges(num_bins);
    let gradient = colorgrad::preset::turbo();

    chart
        .draw_series(grid.indexed_iter().map(|((i, j), &value)| {
            let [r, g, b, _] = gradient.at(((value - vmin) / span) as f32).to_rgba8();
            Rectangle::new(
                [(edges[i], edges[j]), (edges[i + 1], edges[j + 1])],
                RGBColor(r, g, b).filled(),
            )
        }))
        .map_err(render_err)?;

    // Diagonal reference line, dashed by drawing every other segment
    let diagonal: Vec<(f64, f64)> = (0..=40).map(|k| k as f64 / 40.0).map(|t| (t, t)).collect();
    for segment in diagonal.chunks(2) {
        if segment.len() == 2 {
            chart
                .draw_series(LineSeries::new(
                    segment.to_vec(),
                    WHITE.stroke_width(2),
                ))
                .map_err(render_err)?;
        }
    }

    Ok(())
}
