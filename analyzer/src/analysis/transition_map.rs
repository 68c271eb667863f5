//! Per-molecule aggregation of transition records onto the FRET grid.

use ndarray::Array2;
use tracing::warn;

use crate::analysis::binning::find_bin;
use crate::models::{Grid, TransitionRecord};

/// Bin one molecule's records into a transition-count grid and a parallel
/// dwell-time-sum grid, both indexed `[initial_bin, final_bin]`.
///
/// A record whose initial or final FRET cannot be binned (outside [0, 1])
/// is logged and skipped; such records point at malformed input but must
/// not poison the rest of the trajectory.
pub fn aggregate_transitions(records: &[TransitionRecord], edges: &[f64]) -> (Grid, Grid) {
    let num_bins = edges.len() - 1;
    let mut counts = Array2::zeros((num_bins, num_bins));
    let mut dwell_sums = Array2::zeros((num_bins, num_bins));

    for record in records {
        let initial = find_bin(record.initial_fret, edges);
        let final_ = find_bin(record.final_fret, edges);
        match (initial, final_) {
            (Some(i), Some(j)) => {
                counts[[i, j]] += 1.0;
                dwell_sums[[i, j]] += record.dwell_frames;
            }
            _ => {
                warn!(
                    "Skipping unbinnable transition ({}, {}): FRET outside [0, 1]",
                    record.initial_fret, record.final_fret
                );
            }
        }
    }

    (counts, dwell_sums)
}

/// Collapse a count grid to {0, 1}: did this molecule show the transition
/// at least once.
pub fn existence_from_counts(counts: &Grid) -> Grid {
    counts.mapv(|c| if c != 0.0 { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::binning::bin_edges;
    use ndarray::array;

    fn record(initial: f64, final_: f64, dwell: f64) -> TransitionRecord {
        TransitionRecord {
            initial_fret: initial,
            final_fret: final_,
            dwell_frames: dwell,
        }
    }

    #[test]
    fn two_bin_scenario_matches_by_hand() {
        let records = [
            record(0.1, 0.1, 5.0),
            record(0.1, 0.9, 3.0),
            record(0.9, 0.9, 10.0),
        ];
        let edges = bin_edges(2);
        let (counts, dwell_sums) = aggregate_transitions(&records, &edges);

        assert_eq!(counts, array![[1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(dwell_sums, array![[5.0, 3.0], [0.0, 10.0]]);
    }

    #[test]
    fn cell_total_equals_binned_record_count() {
        let records = [
            record(0.2, 0.8, 1.0),
            record(0.5, 0.5, 1.0),
            record(1.5, 0.5, 1.0), // unbinnable, skipped
        ];
        let (counts, _) = aggregate_transitions(&records, &bin_edges(10));
        assert_eq!(counts.sum(), 2.0);
    }

    #[test]
    fn existence_is_binary() {
        let counts = array![[3.0, 0.0], [0.0, 1.0]];
        assert_eq!(existence_from_counts(&counts), array![[1.0, 0.0], [0.0, 1.0]]);
    }
}
