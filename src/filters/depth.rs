//! Bit depth coercion to 8-bit.
//!
//! The filter only runs on `u8` samples. Wider inputs are brought down to
//! 8 bit before padding:
//!
//! - If any sample exceeds 255, every sample is divided by 256 and truncated.
//! - Otherwise every sample is truncated directly.
//!
//! Conversions saturate, so negative and NaN samples become 0.

use std::fmt;

use ndarray::{Array2, ArrayView2};

/// Sample types accepted by [`coerce_to_u8`].
///
/// Negative signed samples clamp to 0 on coercion (`-5i16` -> 0); they do not
/// wrap around modulo 256.
pub trait Sample: Copy + Send + Sync {
    /// True only for `u8`, which needs no coercion.
    const IS_U8: bool = false;

    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    const IS_U8: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u16, u32, i16, i32, f32, f64);

/// How a non-8-bit input was brought into range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthCoercion {
    /// Samples fit in 8 bit and were cast directly.
    Truncated,
    /// The largest sample exceeded 255; all samples were divided by 256.
    Rescaled { max: f64 },
}

impl fmt::Display for DepthCoercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthCoercion::Truncated => write!(f, "Input is not 8-bit; samples truncated to u8"),
            DepthCoercion::Rescaled { max } => write!(
                f,
                "Input is not 8-bit (max sample {max}); rescaled by 1/256 and truncated to u8"
            ),
        }
    }
}

/// Result of [`coerce_to_u8`].
#[derive(Debug, Clone)]
pub struct Coerced {
    pub image: Array2<u8>,
    /// `None` when the input already was `u8`.
    pub coercion: Option<DepthCoercion>,
}

/// Convert any supported sample type to an 8-bit image.
///
/// # Arguments
/// * `input` - Grayscale image (height, width)
///
/// # Returns
/// The 8-bit image plus the coercion that was applied, if any.
pub fn coerce_to_u8<T: Sample>(input: ArrayView2<T>) -> Coerced {
    if T::IS_U8 {
        return Coerced {
            image: input.mapv(|v| v.to_f64() as u8),
            coercion: None,
        };
    }

    let max = input
        .iter()
        .map(|v| v.to_f64())
        .fold(f64::NEG_INFINITY, f64::max);

    if max > 255.0 {
        Coerced {
            image: input.mapv(|v| (v.to_f64() / 256.0) as u8),
            coercion: Some(DepthCoercion::Rescaled { max }),
        }
    } else {
        Coerced {
            image: input.mapv(|v| v.to_f64() as u8),
            coercion: Some(DepthCoercion::Truncated),
        }
    }
}
