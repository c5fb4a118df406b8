//! Adaptive neighbor weights.
//!
//! A neighbor's influence falls off with the product of its intensity
//! difference to the window center and its squared spatial distance:
//!
//! ```text
//! w = 1 / (1 + |sample - center| * (dy^2 + dx^2) / sensitivity + EPSILON)
//! ```
//!
//! Neighbors close in space and similar in value to the (candidate noisy)
//! center get weights near 1. `sensitivity` flattens (large) or sharpens
//! (small) the curve.

use ndarray::Array2;

use super::window::Window;

/// Added to every denominator, so the center cell (zero difference, zero
/// distance) stays finite before it is zeroed.
pub const EPSILON: f64 = 1e-6;

/// Weight of one neighborhood cell.
///
/// # Arguments
/// * `sample` - Value of the cell
/// * `center` - Value of the window center
/// * `dy`, `dx` - Offsets of the cell from the center
/// * `sensitivity` - Decay control (> 0)
#[inline]
pub fn adaptive_weight(sample: u8, center: u8, dy: isize, dx: isize, sensitivity: f64) -> f64 {
    let spatial_dist_sq = (dy * dy + dx * dx) as f64;
    let intensity_diff = (sample as f64 - center as f64).abs();
    1.0 / (1.0 + intensity_diff * spatial_dist_sq / sensitivity + EPSILON)
}

/// Weights for every cell of `window`, center forced to exactly zero.
///
/// The center pixel is the one under suspicion and must not vote for itself.
pub fn weight_grid(window: &Window, sensitivity: f64) -> Array2<f64> {
    let size = window.size();
    let center = window.center();

    let mut weights = Array2::<f64>::zeros((size, size));
    for ((dy, dx, v), w) in window.offsets().zip(weights.iter_mut()) {
        *w = adaptive_weight(v, center, dy, dx, sensitivity);
    }

    let r = window.radius();
    weights[[r, r]] = 0.0;

    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_center_cell_is_nearly_one() {
        let w = adaptive_weight(200, 200, 0, 0, 10.0);
        assert_relative_eq!(w, 1.0 / (1.0 + EPSILON));
    }

    #[test]
    fn test_same_value_ignores_distance() {
        let near = adaptive_weight(50, 50, 0, 1, 10.0);
        let far = adaptive_weight(50, 50, 2, 2, 10.0);
        assert_eq!(near, far);
    }

    #[test]
    fn test_known_value() {
        // 240 * 2 / 10 = 48
        let w = adaptive_weight(10, 250, 1, 1, 10.0);
        assert_relative_eq!(w, 1.0 / (49.0 + EPSILON), epsilon = 1e-15);
    }

    #[test]
    fn test_monotonic_in_distance_and_difference() {
        let base = adaptive_weight(100, 120, 0, 1, 10.0);
        assert!(adaptive_weight(100, 120, 1, 1, 10.0) < base);
        assert!(adaptive_weight(100, 120, 0, 2, 10.0) < base);
        assert!(adaptive_weight(90, 120, 0, 1, 10.0) < base);
    }

    #[test]
    fn test_sensitivity_flattens_curve() {
        let sharp = adaptive_weight(0, 255, 1, 0, 1.0);
        let flat = adaptive_weight(0, 255, 1, 0, 1000.0);
        assert!(flat > sharp);
        assert!(flat > 0.7);
        assert!(sharp < 0.01);
    }

    #[test]
    fn test_weight_is_symmetric_in_values() {
        assert_eq!(
            adaptive_weight(30, 200, -1, 2, 5.0),
            adaptive_weight(200, 30, 1, -2, 5.0)
        );
    }

    #[test]
    fn test_grid_zeroes_center() {
        let cells = array![[10u8, 10, 10], [10, 250, 10], [10, 10, 10]];
        let window = Window::new(cells.view()).unwrap();
        let weights = weight_grid(&window, 10.0);

        assert_eq!(weights[[1, 1]], 0.0);
        // Edge neighbors: 240 * 1 / 10 = 24
        assert_relative_eq!(weights[[0, 1]], 1.0 / (25.0 + EPSILON));
        // Diagonal neighbors: 240 * 2 / 10 = 48
        assert_relative_eq!(weights[[2, 2]], 1.0 / (49.0 + EPSILON));
        assert!(weights.iter().all(|&w| w >= 0.0 && w < 1.0));
    }
}
