//! Aggregation of per-molecule grids across a whole dataset.

use std::path::PathBuf;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::info;

use crate::analysis::transition_map::{aggregate_transitions, existence_from_counts};
use crate::data_handling::trace_files::load_trace_file;
use crate::models::{AnalysisError, AnalysisResult, Grid};

/// Elementwise sums over every input file, freshly allocated per call.
#[derive(Debug, Clone)]
pub struct CrossFileSums {
    /// Fraction of molecules showing each transition at least once, in [0, 1].
    pub fraction_of_molecules: Grid,
    /// Total transition events per cell across all files.
    pub total_events: Grid,
    /// Total dwell time per cell, in frames.
    pub total_dwell_time: Grid,
}

/// Load every file, aggregate it, and sum the per-file grids.
///
/// The per-file pass runs on the rayon pool; the reduction is elementwise
/// addition, so the result is independent of file order. Any unreadable or
/// malformed file aborts the whole aggregation with an error naming it.
pub fn aggregate_across_files(files: &[PathBuf], edges: &[f64]) -> AnalysisResult<CrossFileSums> {
    if files.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let num_bins = edges.len() - 1;
    let zero = || Array2::<f64>::zeros((num_bins, num_bins));

    let (existence_sum, total_events, total_dwell_time) = files
        .par_iter()
        .map(|path| -> AnalysisResult<(Grid, Grid, Grid)> {
            let records = load_trace_file(path)?;
            let (counts, dwell_sums) = aggregate_transitions(&records, edges);
            let existence = existence_from_counts(&counts);
            Ok((existence, counts, dwell_sums))
        })
        .try_reduce(
            || (zero(), zero(), zero()),
            |a, b| Ok((a.0 + b.0, a.1 + b.1, a.2 + b.2)),
        )?;

    info!(
        "Aggregated {} files: {} transition events",
        files.len(),
        total_events.sum()
    );

    Ok(CrossFileSums {
        fraction_of_molecules: existence_sum / files.len() as f64,
        total_events,
        total_dwell_time,
    })
}
