//! Linear min-max rescaling of metric values into a visual range.

/// Size range (in pixels) that betweenness scores are rescaled into.
pub const NODE_SIZE_RANGE: (f64, f64) = (7.5, 17.5);

/// Rescale `values` linearly into `[lo, hi]`.
///
/// The minimum input maps to `lo`, the maximum to `hi`, everything else
/// proportionally in between. When every input is equal the slope is
/// undefined, so each output is pinned to the range midpoint instead of
/// dividing by zero. An empty slice yields an empty vector.
#[must_use]
pub fn min_max(values: &[f64], (lo, hi): (f64, f64)) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    // Non-empty here, so max exists too.
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= f64::EPSILON {
        let midpoint = f64::midpoint(lo, hi);
        return vec![midpoint; values.len()];
    }

    values
        .iter()
        .map(|v| lo + (v - min) / span * (hi - lo))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_empty_output() {
        assert!(min_max(&[], NODE_SIZE_RANGE).is_empty());
    }

    #[test]
    fn extremes_map_to_range_bounds() {
        let scaled = min_max(&[0.0, 0.25, 1.0], (7.5, 17.5));
        assert!((scaled[0] - 7.5).abs() < 1e-10);
        assert!((scaled[1] - 10.0).abs() < 1e-10);
        assert!((scaled[2] - 17.5).abs() < 1e-10);
    }

    #[test]
    fn constant_input_maps_to_midpoint() {
        let scaled = min_max(&[0.4, 0.4, 0.4], (7.5, 17.5));
        for s in scaled {
            assert!((s - 12.5).abs() < 1e-10, "expected midpoint, got {s}");
        }
    }

    #[test]
    fn single_value_maps_to_midpoint() {
        let scaled = min_max(&[3.0], (7.5, 17.5));
        assert_eq!(scaled.len(), 1);
        assert!((scaled[0] - 12.5).abs() < 1e-10);
    }

    #[test]
    fn preserves_order() {
        let scaled = min_max(&[0.2, 0.9, 0.5], (0.0, 1.0));
        assert!(scaled[0] < scaled[2]);
        assert!(scaled[2] < scaled[1]);
    }

    #[test]
    fn negative_inputs_are_fine() {
        let scaled = min_max(&[-2.0, 0.0, 2.0], (7.5, 17.5));
        assert!((scaled[0] - 7.5).abs() < 1e-10);
        assert!((scaled[1] - 12.5).abs() < 1e-10);
        assert!((scaled[2] - 17.5).abs() < 1e-10);
    }
}
