//! Square neighborhood view used by the detector and the restorer.

use ndarray::ArrayView2;

use crate::error::FilterError;

/// Borrowed `size x size` neighborhood with an odd side length.
///
/// Windows never own samples; they are views into a padded buffer (or any
/// other square array) and live only while one pixel is processed.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    cells: ArrayView2<'a, u8>,
}

impl<'a> Window<'a> {
    /// Wrap an arbitrary view, checking that it is square with an odd side.
    pub fn new(cells: ArrayView2<'a, u8>) -> Result<Self, FilterError> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows % 2 == 0 {
            return Err(FilterError::InvalidWindow { rows, cols });
        }
        Ok(Window { cells })
    }

    /// Slices taken by `PaddedImage::window` are square and odd by construction.
    pub(crate) fn from_padded(cells: ArrayView2<'a, u8>) -> Self {
        debug_assert_eq!(cells.nrows(), cells.ncols());
        debug_assert_eq!(cells.nrows() % 2, 1);
        Window { cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Distance from the center to the window edge.
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    pub fn cells(&self) -> ArrayView2<'a, u8> {
        self.cells
    }

    pub fn center(&self) -> u8 {
        let r = self.radius();
        self.cells[[r, r]]
    }

    /// Smallest and largest sample in the window, center included.
    pub fn range(&self) -> (u8, u8) {
        self.cells
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Smallest sample among the neighbors, center excluded.
    pub fn neighbor_floor(&self) -> u8 {
        self.offsets()
            .filter(|&(dy, dx, _)| dy != 0 || dx != 0)
            .map(|(_, _, v)| v)
            .min()
            .unwrap_or_else(|| self.center())
    }

    /// Row-major iterator over `(dy, dx, sample)` with offsets relative to
    /// the center, each in `[-radius, radius]`.
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize, u8)> + 'a {
        let size = self.size();
        let r = self.radius() as isize;
        self.cells.into_iter().enumerate().map(move |(i, &v)| {
            ((i / size) as isize - r, (i % size) as isize - r, v)
        })
    }
}
