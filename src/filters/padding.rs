//! Symmetric boundary padding.
//!
//! The padded buffer mirrors the image about its edges, repeating the edge
//! sample itself (`d c b a | a b c d | d c b a`). Every pixel of the original
//! image therefore has a complete neighborhood window inside the buffer.

use ndarray::{s, Array2, ArrayView2};

use super::window::Window;

/// Map an index relative to the image origin onto `[0, n)` by symmetric
/// reflection.
///
/// Indices further out than one image length keep reflecting with period
/// `2 * n`, so padding wider than the image is still fully defined.
///
/// `n` must be non-zero.
#[inline]
pub fn reflect_index(k: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = k.rem_euclid(period) as usize;
    if m < n {
        m
    } else {
        2 * n - 1 - m
    }
}

/// Read-only, symmetrically padded copy of an 8-bit image.
#[derive(Debug, Clone)]
pub struct PaddedImage {
    data: Array2<u8>,
    pad: usize,
}

impl PaddedImage {
    /// Build a padded copy with `pad` mirrored rows/columns on every side.
    ///
    /// # Arguments
    /// * `image` - Non-empty grayscale image (height, width)
    /// * `pad` - Border width
    ///
    /// # Returns
    /// Buffer of shape (height + 2 * pad, width + 2 * pad). An empty image
    /// yields an empty buffer.
    pub fn symmetric(image: ArrayView2<u8>, pad: usize) -> Self {
        let (height, width) = image.dim();
        if height == 0 || width == 0 {
            return PaddedImage {
                data: Array2::zeros((0, 0)),
                pad,
            };
        }

        let offset = pad as isize;
        let data = Array2::from_shape_fn((height + 2 * pad, width + 2 * pad), |(y, x)| {
            let sy = reflect_index(y as isize - offset, height);
            let sx = reflect_index(x as isize - offset, width);
            image[[sy, sx]]
        });

        PaddedImage { data, pad }
    }

    pub fn pad(&self) -> usize {
        self.pad
    }

    /// Shape of the padded buffer as (rows, cols).
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Neighborhood window of the original pixel `(row, col)`.
    ///
    /// The window's top-left corner in the padded buffer is `(row, col)`, so
    /// its center lands on the original pixel.
    ///
    /// # Panics
    /// If `(row, col)` lies outside the original image.
    pub fn window(&self, row: usize, col: usize) -> Window<'_> {
        let size = 2 * self.pad + 1;
        Window::from_padded(self.data.slice(s![row..row + size, col..col + size]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s, Array2};

    #[test]
    fn test_reflect_index_inside() {
        for k in 0..5 {
            assert_eq!(reflect_index(k, 5), k as usize);
        }
    }

    #[test]
    fn test_reflect_index_repeats_edge() {
        // Left of the origin: -1 -> 0, -2 -> 1
        assert_eq!(reflect_index(-1, 4), 0);
        assert_eq!(reflect_index(-2, 4), 1);
        // Right of the end: 4 -> 3, 5 -> 2
        assert_eq!(reflect_index(4, 4), 3);
        assert_eq!(reflect_index(5, 4), 2);
    }

    #[test]
    fn test_reflect_index_wider_than_image() {
        // n = 2, k in -4..4: a b b a | a b | b a
        let expected = [0, 1, 1, 0, 0, 1, 1, 0];
        for (i, k) in (-4..4).enumerate() {
            assert_eq!(reflect_index(k, 2), expected[i], "k = {k}");
        }
        // A single sample reflects onto itself everywhere
        for k in -5..5 {
            assert_eq!(reflect_index(k, 1), 0);
        }
    }

    #[test]
    fn test_symmetric_pad_one() {
        let img = array![[1u8, 2, 3], [4, 5, 6], [7, 8, 9]];
        let padded = PaddedImage::symmetric(img.view(), 1);

        let expected = array![
            [1u8, 1, 2, 3, 3],
            [1, 1, 2, 3, 3],
            [4, 4, 5, 6, 6],
            [7, 7, 8, 9, 9],
            [7, 7, 8, 9, 9],
        ];
        assert_eq!(padded.view(), expected.view());
    }

    #[test]
    fn test_symmetric_pad_two_mirrors_adjacent_first() {
        let img = array![[1u8, 2, 3], [4, 5, 6], [7, 8, 9]];
        let padded = PaddedImage::symmetric(img.view(), 2);

        assert_eq!(padded.dim(), (7, 7));
        // Top-left outward order: row 1 mirrors row 0, row 0 mirrors row 1
        assert_eq!(padded.view().row(0).to_vec(), vec![5, 4, 4, 5, 6, 6, 5]);
        assert_eq!(padded.view().row(1).to_vec(), vec![2, 1, 1, 2, 3, 3, 2]);
        // Interior is an exact copy
        assert_eq!(padded.view().slice(s![2..5, 2..5]), img.view());
        // Doubly reflected corner
        assert_eq!(padded.view()[[6, 6]], 5);
    }

    #[test]
    fn test_pad_wider_than_image() {
        let img = array![[42u8]];
        let padded = PaddedImage::symmetric(img.view(), 3);
        assert_eq!(padded.dim(), (7, 7));
        assert!(padded.view().iter().all(|&v| v == 42));
    }

    #[test]
    fn test_every_window_in_bounds() {
        let img = Array2::from_shape_fn((3, 4), |(y, x)| (y * 4 + x) as u8);
        let padded = PaddedImage::symmetric(img.view(), 2);
        for y in 0..3 {
            for x in 0..4 {
                let window = padded.window(y, x);
                assert_eq!(window.size(), 5);
                assert_eq!(window.center(), img[[y, x]]);
            }
        }
    }

    #[test]
    fn test_empty_image() {
        let img = Array2::<u8>::zeros((0, 4));
        let padded = PaddedImage::symmetric(img.view(), 2);
        assert_eq!(padded.dim(), (0, 0));
    }
}
