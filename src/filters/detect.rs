//! Min/max impulse detection.

use super::window::Window;

/// Whether the window center is a candidate impulse.
///
/// A pixel is clean only if it lies strictly between the window minimum and
/// maximum. Anything else, including a flat window where the center is both,
/// is treated as noise.
#[inline]
pub fn is_impulse(window: &Window) -> bool {
    let center = window.center();
    let (lo, hi) = window.range();
    !(lo < center && center < hi)
}
