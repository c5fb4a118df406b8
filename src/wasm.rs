//! WebAssembly exports for the adaptive filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images travel
//! as flat row-major grayscale buffers (length = width * height).

use ndarray::Array2;
use wasm_bindgen::prelude::*;

use crate::error::FilterError;
use crate::filters::noise::add_salt_and_pepper;
use crate::filters::AdaptiveWeightedFilter;

fn to_image(data: &[u8], width: usize, height: usize) -> Result<Array2<u8>, FilterError> {
    Array2::from_shape_vec((height, width), data.to_vec()).map_err(|_| FilterError::Shape {
        len: data.len(),
        width,
        height,
    })
}

// ============================================================================
// Adaptive Weighted Filter
// ============================================================================

/// Remove impulse noise from a grayscale image.
///
/// # Arguments
/// * `data` - Flat array of grayscale bytes (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `window_size` - Neighborhood side length (odd, >= 3)
/// * `sensitivity` - Weight decay control (> 0)
///
/// # Returns
/// Flat array of filtered grayscale bytes
#[wasm_bindgen]
pub fn adaptive_weighted_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    window_size: usize,
    sensitivity: f64,
) -> Result<Vec<u8>, JsError> {
    let filter = AdaptiveWeightedFilter::new(window_size, sensitivity)?;
    let input = to_image(data, width, height)?;

    let result = filter.process(input.view());
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Noise Generator
// ============================================================================

/// Add salt-and-pepper noise to a grayscale image.
///
/// # Arguments
/// * `data` - Flat array of grayscale bytes (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `density` - Fraction of corrupted pixels (0.0-1.0)
/// * `seed` - Random seed for deterministic results
#[wasm_bindgen]
pub fn salt_and_pepper_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    density: f32,
    seed: u64,
) -> Result<Vec<u8>, JsError> {
    let input = to_image(data, width, height)?;

    let result = add_salt_and_pepper(input.view(), density, seed);
    Ok(result.into_raw_vec_and_offset().0)
}
