//! Binning, aggregation and classification of FRET transition data.
//!
//! The three top-level operations here feed the plotting layer: transition
//! counts for the TDP, molecule fractions for the TODP, and classified
//! per-cell summaries for the POKIT plot. Every call allocates its own
//! grids; nothing is cached between analyses.

pub mod binning;
pub mod classify;
pub mod cross_file;
pub mod pokit;
pub mod transition_map;

use std::path::PathBuf;

use crate::models::{AnalysisResult, Grid, PokitEntry};

/// Total transition events per (initial, final) FRET cell.
pub fn compute_tdp(files: &[PathBuf], num_bins: usize) -> AnalysisResult<Grid> {
    let edges = binning::bin_edges(num_bins);
    let sums = cross_file::aggregate_across_files(files, &edges)?;
    Ok(sums.total_events)
}

/// Fraction of molecules exhibiting each transition.
pub fn compute_todp(files: &[PathBuf], num_bins: usize) -> AnalysisResult<Grid> {
    let edges = binning::bin_edges(num_bins);
    let sums = cross_file::aggregate_across_files(files, &edges)?;
    Ok(sums.fraction_of_molecules)
}

/// Per-cell POKIT summaries, with dwell times converted via `time_per_frame`.
pub fn compute_pokit(
    files: &[PathBuf],
    num_bins: usize,
    time_per_frame: f64,
) -> AnalysisResult<Vec<PokitEntry>> {
    let edges = binning::bin_edges(num_bins);
    pokit::summarize_for_pokit(files, &edges, time_per_frame)
}
