//! FRET-value binning over the fixed [0, 1] domain.

/// Equal-width bin edges: `num_bins + 1` values from 0.0 to 1.0 inclusive.
/// The endpoint is pinned to exactly 1.0; `num_bins * (1/num_bins)` rounds
/// below it for many bin counts, which would leave 1.0-adjacent values
/// without a bin.
pub fn bin_edges(num_bins: usize) -> Vec<f64> {
    let step = 1.0 / num_bins as f64;
    (0..=num_bins)
        .map(|i| if i == num_bins { 1.0 } else { i as f64 * step })
        .collect()
}

/// Midpoint of each bin, for plotting coordinates.
pub fn bin_centers(edges: &[f64]) -> Vec<f64> {
    edges
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .collect()
}

/// Index of the bin containing `value`, or `None` when the value lies
/// outside [0, 1] (or is NaN) and cannot be assigned.
///
/// Bins are half-open `[e_i, e_{i+1})`, so a value sitting exactly on an
/// interior edge belongs to the bin it opens. The right boundary is the
/// one exception: 1.0 belongs to the last bin, which a plain half-open
/// scan would miss.
pub fn find_bin(value: f64, edges: &[f64]) -> Option<usize> {
    let num_bins = edges.len() - 1;
    if value == 1.0 {
        return Some(num_bins - 1);
    }
    for (idx, pair) in edges.windows(2).enumerate() {
        if value >= pair[0] && value < pair[1] {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_span_zero_to_one() {
        let edges = bin_edges(4);
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[4], 1.0);
        assert!((edges[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn every_in_domain_value_gets_exactly_one_bin() {
        for num_bins in [2, 5, 40] {
            let edges = bin_edges(num_bins);
            for i in 0..=1000 {
                let value = i as f64 / 1000.0;
                let idx = find_bin(value, &edges).unwrap();
                assert!(idx < num_bins, "value {value} escaped the grid");
                assert!(value >= edges[idx]);
                assert!(value <= edges[idx + 1]);
            }
        }
    }

    #[test]
    fn boundaries_resolve_left_closed() {
        let edges = bin_edges(4);
        assert_eq!(find_bin(0.0, &edges), Some(0));
        assert_eq!(find_bin(0.25, &edges), Some(1));
        assert_eq!(find_bin(1.0, &edges), Some(3));
    }

    #[test]
    fn last_edge_is_exactly_one() {
        // 1/n is not representable for most n, so accumulated steps land
        // just below 1.0 unless the endpoint is pinned
        for num_bins in [1, 2, 3, 7, 40, 49, 100] {
            let edges = bin_edges(num_bins);
            assert_eq!(*edges.last().unwrap(), 1.0, "num_bins = {num_bins}");

            let below_one = f64::from_bits(1.0f64.to_bits() - 1);
            assert_eq!(find_bin(below_one, &edges), Some(num_bins - 1));
        }
    }

    #[test]
    fn out_of_domain_values_are_unassigned() {
        let edges = bin_edges(4);
        assert_eq!(find_bin(-0.01, &edges), None);
        assert_eq!(find_bin(1.01, &edges), None);
        assert_eq!(find_bin(f64::NAN, &edges), None);
    }

    #[test]
    fn centers_are_interval_midpoints() {
        let centers = bin_centers(&bin_edges(2));
        assert!((centers[0] - 0.25).abs() < 1e-12);
        assert!((centers[1] - 0.75).abs() < 1e-12);
    }
}
