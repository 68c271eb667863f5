//! POKIT figure: concentric circles per transition cell, circle count
//! encoding the fraction of molecules and stroke color the average dwell
//! time.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::analysis::classify::{classify_dwell_time, classify_fraction};
use crate::data_handling::conditions::PokitConditions;
use crate::models::{AnalysisError, AnalysisResult, PokitEntry};
use crate::plotting::{wants_svg, FIGURE_SIZE};

/// Ring radii as fractions of the plotting-area width, innermost first.
const RING_RADII: [f64; 4] = [0.016, 0.032, 0.048, 0.064];

pub fn plot_pokit(
    entries: &[PokitEntry],
    conditions: &PokitConditions,
    output: &Path,
) -> AnalysisResult<()> {
    if wants_svg(output) {
        let root = SVGBackend::new(output, FIGURE_SIZE).into_drawing_area();
        draw_pokit(&root, entries, conditions)?;
        root.present()
            .map_err(|e| AnalysisError::Render(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output, FIGURE_SIZE).into_drawing_area();
        draw_pokit(&root, entries, conditions)?;
        root.present()
            .map_err(|e| AnalysisError::Render(e.to_string()))?;
    }
    info!("POKIT plot saved to {}", output.display());
    Ok(())
}

fn color_for_label(label: &str) -> RGBColor {
    match label {
        "red" => RGBColor(220, 20, 60),
        "purple" => RGBColor(128, 0, 128),
        "green" => RGBColor(34, 139, 34),
        "blue" => RGBColor(30, 60, 200),
        _ => RGBColor(0, 0, 0),
    }
}

fn draw_pokit<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    entries: &[PokitEntry],
    conditions: &PokitConditions,
) -> AnalysisResult<()> {
    let render_err = |e: DrawingAreaErrorKind<DB::ErrorType>| AnalysisError::Render(e.to_string());

    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(root)
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

    // Ring radii in pixels, derived from the actual plotting-area width
    let pixel_range = chart.plotting_area().get_pixel_range();
    let area_width = (pixel_range.0.end - pixel_range.0.start) as f64;
    let radii_px: Vec<i32> = RING_RADII.iter().map(|f| (f * area_width) as i32).collect();

    for entry in entries {
        let rings = classify_fraction(entry.fraction, &conditions.fraction)?;
        let label = classify_dwell_time(entry.avg_dwell_time, &conditions.dwell_time)?;
        let color = color_for_label(label);

        for ring in 0..rings as usize {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (entry.initial_fret, entry.final_fret),
                    radii_px[ring],
                    color.mix(0.6).stroke_width(2),
                )))
                .map_err(render_err)?;
        }
    }

    // Dashed diagonal reference line
    let diagonal: Vec<(f64, f64)> = (0..=40).map(|k| k as f64 / 40.0).map(|t| (t, t)).collect();
    for segment in diagonal.chunks(2) {
        if segment.len() == 2 {
            chart
                .draw_series(LineSeries::new(
                    segment.to_vec(),
                    BLACK.stroke_width(2),
                ))
                .map_err(render_err)?;
        }
    }

    Ok(())
}
