//! Adaptive weighted impulse filter.
//!
//! For every pixel the filter looks at its `window_size x window_size`
//! neighborhood in a symmetrically padded copy of the input:
//!
//! 1. **Detect** - a pixel strictly between the window minimum and maximum is
//!    clean and kept as is; anything else is a candidate impulse.
//! 2. **Weigh** - every neighbor gets a weight that decays with its squared
//!    distance times its intensity difference to the center.
//! 3. **Restore** - the pixel becomes the truncated weighted mean of its
//!    neighbors, or the window median if all weights vanished.
//!
//! Decisions read only the padded input, never the output being written, so
//! pixels are independent. [`AdaptiveWeightedFilter::process_parallel`]
//! uses that to split rows across rayon workers with identical results.

use log::{debug, trace, warn};
use ndarray::{Array2, ArrayView2, ArrayViewMut1, Axis};
use rayon::prelude::*;

use super::config::FilterConfig;
use super::depth::{coerce_to_u8, DepthCoercion, Sample};
use super::detect::is_impulse;
use super::padding::PaddedImage;
use super::restore::{restore, Restoration};
use crate::error::FilterError;

/// Output of [`AdaptiveWeightedFilter::process_any`].
#[derive(Debug, Clone)]
pub struct FilterOutput {
    pub image: Array2<u8>,
    /// Set when the input was not 8-bit and had to be coerced first.
    pub coercion: Option<DepthCoercion>,
}

/// Per-call counters, logged at debug level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PassStats {
    flagged: usize,
    median_fallbacks: usize,
}

impl PassStats {
    fn record(&mut self, restoration: Restoration) {
        self.flagged += 1;
        if let Restoration::Median(_) = restoration {
            self.median_fallbacks += 1;
        }
    }

    fn merge(self, other: PassStats) -> PassStats {
        PassStats {
            flagged: self.flagged + other.flagged,
            median_fallbacks: self.median_fallbacks + other.median_fallbacks,
        }
    }
}

/// Impulse noise filter for 8-bit grayscale images.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdaptiveWeightedFilter {
    config: FilterConfig,
}

impl AdaptiveWeightedFilter {
    /// Create a filter.
    ///
    /// # Arguments
    /// * `window_size` - Neighborhood side length (odd, >= 3)
    /// * `sensitivity` - Weight decay control (> 0)
    ///
    /// # Errors
    /// [`FilterError::InvalidConfiguration`] if either argument is out of range.
    pub fn new(window_size: usize, sensitivity: f64) -> Result<Self, FilterError> {
        Ok(AdaptiveWeightedFilter {
            config: FilterConfig::new(window_size, sensitivity)?,
        })
    }

    pub fn with_config(config: FilterConfig) -> Self {
        AdaptiveWeightedFilter { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter an 8-bit image, one pixel at a time in row-major order.
    ///
    /// # Returns
    /// New image with the same shape; clean pixels are copied unchanged.
    pub fn process(&self, image: ArrayView2<u8>) -> Array2<u8> {
        let (mut output, padded) = match self.prepare(image) {
            Some(prepared) => prepared,
            None => return image.to_owned(),
        };

        let mut stats = PassStats::default();
        for (i, row) in output.axis_iter_mut(Axis(0)).enumerate() {
            stats = stats.merge(self.process_row(&padded, i, row));
        }

        self.log_pass(image.dim(), stats);
        output
    }

    /// Same result as [`process`](Self::process), with rows distributed over
    /// the rayon thread pool.
    pub fn process_parallel(&self, image: ArrayView2<u8>) -> Array2<u8> {
        let (mut output, padded) = match self.prepare(image) {
            Some(prepared) => prepared,
            None => return image.to_owned(),
        };

        let stats = output
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .map(|(i, row)| self.process_row(&padded, i, row))
            .reduce(PassStats::default, PassStats::merge);

        self.log_pass(image.dim(), stats);
        output
    }

    /// Filter an image of any supported sample type.
    ///
    /// Non-8-bit input is coerced first (see [`coerce_to_u8`]); the coerced
    /// image is what gets padded and filtered. The coercion is reported in the
    /// returned [`FilterOutput`] and as a warning in the log.
    pub fn process_any<T: Sample>(&self, image: ArrayView2<T>) -> FilterOutput {
        let coerced = coerce_to_u8(image);
        if let Some(coercion) = coerced.coercion {
            warn!("{coercion}");
        }

        FilterOutput {
            image: self.process(coerced.image.view()),
            coercion: coerced.coercion,
        }
    }

    /// Decide and, if needed, restore the original pixel `(row, col)`.
    ///
    /// # Returns
    /// `None` for a clean pixel, otherwise the replacement.
    pub fn process_pixel(
        &self,
        padded: &PaddedImage,
        row: usize,
        col: usize,
    ) -> Option<Restoration> {
        let window = padded.window(row, col);
        if !is_impulse(&window) {
            return None;
        }

        let restoration = restore(&window, self.config.sensitivity());
        if let Restoration::Median(v) = restoration {
            trace!("Weights vanished at ({row}, {col}); median fallback {v}");
        }
        Some(restoration)
    }

    /// Output buffer (copy of the input in row-major layout) and padded input.
    /// `None` for an empty image.
    fn prepare(&self, image: ArrayView2<u8>) -> Option<(Array2<u8>, PaddedImage)> {
        let (height, width) = image.dim();
        if height == 0 || width == 0 {
            debug!("Empty {height}x{width} image, nothing to filter");
            return None;
        }

        let output = image.as_standard_layout().into_owned();
        let padded = PaddedImage::symmetric(image, self.config.pad());
        Some((output, padded))
    }

    fn process_row(
        &self,
        padded: &PaddedImage,
        row: usize,
        mut out: ArrayViewMut1<u8>,
    ) -> PassStats {
        let mut stats = PassStats::default();
        for (col, px) in out.iter_mut().enumerate() {
            if let Some(restoration) = self.process_pixel(padded, row, col) {
                *px = restoration.value();
                stats.record(restoration);
            }
        }
        stats
    }

    fn log_pass(&self, (height, width): (usize, usize), stats: PassStats) {
        debug!(
            "Adaptive filter {}x{} (window {}, sensitivity {}): {} of {} pixels flagged, {} median fallbacks",
            height,
            width,
            self.config.window_size(),
            self.config.sensitivity(),
            stats.flagged,
            height * width,
            stats.median_fallbacks,
        );
    }
}
