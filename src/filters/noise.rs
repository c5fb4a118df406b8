//! Salt-and-pepper noise generator.
//!
//! Produces the impulse noise the adaptive filter removes. Deterministic for
//! a given seed so results can be compared across runs and bindings.

use ndarray::{Array2, ArrayView2};

// ============================================================================
// Simple RNG (deterministic for parity testing)
// ============================================================================

/// Linear congruential generator with MINSTD parameters.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.wrapping_add(1), // Avoid zero
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(48271).wrapping_add(1) % 2147483647;
        self.state as u32
    }

    /// Uniform f32 in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (2147483647.0f32)
    }
}

// ============================================================================
// Salt and Pepper
// ============================================================================

/// Corrupt a grayscale image with impulse noise.
///
/// Each pixel independently becomes an impulse with probability `density`;
/// impulses are pepper (0) or salt (255) with equal probability.
///
/// # Arguments
/// * `input` - Grayscale image (height, width)
/// * `density` - Fraction of corrupted pixels, clamped to 0.0-1.0
/// * `seed` - Random seed for deterministic results
///
/// # Returns
/// Noisy copy of the image
pub fn add_salt_and_pepper(input: ArrayView2<u8>, density: f32, seed: u64) -> Array2<u8> {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = SimpleRng::new(seed);

    let mut output = input.to_owned();
    for v in output.iter_mut() {
        let hit = rng.next_f32() < density;
        let salt = rng.next_f32() < 0.5;
        if hit {
            *v = if salt { 255 } else { 0 };
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_density_is_identity() {
        let img = Array2::from_shape_fn((8, 8), |(y, x)| (y * 8 + x) as u8);
        assert_eq!(add_salt_and_pepper(img.view(), 0.0, 7), img);
    }

    #[test]
    fn test_full_density_only_impulses() {
        let img = Array2::from_elem((10, 10), 128u8);
        let result = add_salt_and_pepper(img.view(), 1.0, 3);
        assert!(result.iter().all(|&v| v == 0 || v == 255));
        assert!(result.iter().any(|&v| v == 0));
        assert!(result.iter().any(|&v| v == 255));
    }

    #[test]
    fn test_deterministic_per_seed() {
        let img = Array2::from_elem((16, 16), 100u8);
        let a = add_salt_and_pepper(img.view(), 0.2, 12345);
        let b = add_salt_and_pepper(img.view(), 0.2, 12345);
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_roughly_respected() {
        let img = Array2::from_elem((100, 100), 100u8);
        let result = add_salt_and_pepper(img.view(), 0.1, 42);
        let hits = result.iter().filter(|&&v| v != 100).count();
        assert!(hits > 500 && hits < 1500, "hits = {hits}");
    }
}
