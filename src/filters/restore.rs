//! Weighted restoration of a flagged pixel, with a median fallback.

use super::weight::weight_grid;
use super::window::Window;

/// Replacement value for a flagged pixel and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restoration {
    /// Truncated weighted mean of the neighborhood.
    Weighted(u8),
    /// Median of the window; used when every weight vanished.
    Median(u8),
}

impl Restoration {
    pub fn value(self) -> u8 {
        match self {
            Restoration::Weighted(v) | Restoration::Median(v) => v,
        }
    }
}

/// Restore the center of `window` from its neighbors.
///
/// The weighted mean `sum(x * w) / sum(w)` is accumulated as deviations from
/// the lowest neighbor value, then shifted back. Accumulating raw values
/// instead can land just below an integer and truncate one level low; the
/// shifted sum makes a uniform neighborhood restore to exactly its value.
///
/// # Arguments
/// * `window` - Neighborhood of the flagged pixel
/// * `sensitivity` - Weight decay control (> 0)
///
/// # Returns
/// [`Restoration::Weighted`] when the total weight is positive, otherwise
/// [`Restoration::Median`].
pub fn restore(window: &Window, sensitivity: f64) -> Restoration {
    let weights = weight_grid(window, sensitivity);
    let floor = window.neighbor_floor();

    let mut total_weight = 0.0f64;
    let mut weighted_excess = 0.0f64;
    for (&v, &w) in window.cells().iter().zip(weights.iter()) {
        total_weight += w;
        weighted_excess += (v as f64 - floor as f64) * w;
    }

    if total_weight > 0.0 {
        let restored = weighted_excess / total_weight + floor as f64;
        Restoration::Weighted(restored.clamp(0.0, 255.0) as u8)
    } else {
        Restoration::Median(window_median(window))
    }
}

/// Middle element of the sorted window samples.
///
/// Windows have an odd number of cells, so no averaging is involved.
pub fn window_median(window: &Window) -> u8 {
    let mut values: Vec<u8> = window.cells().iter().copied().collect();
    values.sort_unstable();
    values[values.len() / 2]
}
