//! Sparse POKIT summary: one entry per occupied grid cell.

use std::path::PathBuf;

use crate::analysis::binning::bin_centers;
use crate::analysis::cross_file::aggregate_across_files;
use crate::models::{AnalysisResult, PokitEntry};

/// Aggregate the dataset and emit one [`PokitEntry`] per cell with at least
/// one event, in row-major `(initial_bin, final_bin)` order.
///
/// `time_per_frame` converts dwell times from frames into time units before
/// averaging. Cells without events are omitted, so the 0/0 average never
/// arises.
pub fn summarize_for_pokit(
    files: &[PathBuf],
    edges: &[f64],
    time_per_frame: f64,
) -> AnalysisResult<Vec<PokitEntry>> {
    let sums = aggregate_across_files(files, edges)?;
    let centers = bin_centers(edges);

    let mut entries = Vec::new();
    for ((i, j), &events) in sums.total_events.indexed_iter() {
        if events == 0.0 {
            continue;
        }
        entries.push(PokitEntry {
            initial_fret: centers[i],
            final_fret: centers[j],
            avg_dwell_time: sums.total_dwell_time[[i, j]] * time_per_frame / events,
            fraction: sums.fraction_of_molecules[[i, j]],
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::binning::bin_edges;
    use std::fs;

    #[test]
    fn averages_and_omits_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.dat");
        let b = dir.path().join("b.dat");
        fs::write(&a, "0.1 0.1 4\n0.2 0.2 6\n").unwrap();
        fs::write(&b, "0.9 0.9 10\n").unwrap();

        let entries = summarize_for_pokit(&[a, b], &bin_edges(2), 5.0).unwrap();

        // Occupied cells only: (0,0) and (1,1)
        assert_eq!(entries.len(), 2);

        // (0,0): two events totalling 10 frames at 5 time units per frame
        assert_eq!(entries[0].initial_fret, 0.25);
        assert_eq!(entries[0].final_fret, 0.25);
        assert_eq!(entries[0].avg_dwell_time, 25.0);
        assert_eq!(entries[0].fraction, 0.5);

        assert_eq!(entries[1].initial_fret, 0.75);
        assert_eq!(entries[1].avg_dwell_time, 50.0);
    }

    #[test]
    fn entries_come_out_row_major() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.dat");
        fs::write(&a, "0.9 0.1 1\n0.1 0.9 1\n0.1 0.1 1\n").unwrap();

        let entries = summarize_for_pokit(&[a], &bin_edges(2), 1.0).unwrap();
        let cells: Vec<(f64, f64)> = entries
            .iter()
            .map(|e| (e.initial_fret, e.final_fret))
            .collect();
        assert_eq!(cells, vec![(0.25, 0.25), (0.25, 0.75), (0.75, 0.25)]);
    }
}
