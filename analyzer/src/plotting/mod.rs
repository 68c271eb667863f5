//! Figure rendering with plotters.
//!
//! PNG/BMP output goes through `BitMapBackend`; an `.svg` extension selects
//! `SVGBackend` instead. The analysis layer hands over finished grids and
//! entries; nothing here mutates them.

pub mod heatmap;
pub mod pokit_plot;

use std::path::{Path, PathBuf};

pub(crate) const FIGURE_SIZE: (u32, u32) = (760, 640);

/// `TDP.png`, or `<name>_TDP.png` when the user supplied a figure name.
pub fn figure_path(figure_name: Option<&str>, kind: &str, figure_type: &str) -> PathBuf {
    match figure_name {
        Some(name) => PathBuf::from(format!("{name}_{kind}.{figure_type}")),
        None => PathBuf::from(format!("{kind}.{figure_type}")),
    }
}

pub(crate) fn wants_svg(output: &Path) -> bool {
    output
        .extension()
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
