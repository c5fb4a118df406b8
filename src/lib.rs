//! AWLF Rust Extensions
//!
//! Adaptive weighted local filtering of impulse (salt-and-pepper) noise in
//! grayscale images, with Python bindings via PyO3 and WASM bindings for
//! JavaScript.
//!
//! ## Image Format
//! Images are single-channel `(height, width)` arrays:
//! - `u8`: filtered as is (0-255)
//! - wider integer or float samples: coerced to `u8` before filtering, with
//!   the coercion reported to the caller
//!
//! ## Example
//! ```
//! use awlf_rust::AdaptiveWeightedFilter;
//! use ndarray::array;
//!
//! let noisy = array![[10u8, 10, 10], [10, 250, 10], [10, 10, 10]];
//! let filter = AdaptiveWeightedFilter::new(3, 10.0).unwrap();
//! let clean = filter.process(noisy.view());
//! assert_eq!(clean[[1, 1]], 10);
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::FilterError;
pub use filters::{AdaptiveWeightedFilter, DepthCoercion, FilterConfig, FilterOutput};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use std::ffi::CString;

    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::{PyUserWarning, PyValueError};
    use pyo3::prelude::*;

    use crate::filters::noise as noise_mod;
    use crate::filters::{AdaptiveWeightedFilter as Filter, FilterOutput};

    /// Hand a filtered image to Python, raising a `UserWarning` first if the
    /// input had to be coerced to 8 bit.
    fn into_py_image<'py>(
        py: Python<'py>,
        output: FilterOutput,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        if let Some(coercion) = output.coercion {
            let message = CString::new(coercion.to_string())?;
            PyErr::warn(py, py.get_type::<PyUserWarning>().as_any(), &message, 1)?;
        }
        Ok(output.image.into_pyarray(py))
    }

    // ========================================================================
    // Adaptive Weighted Filter
    // ========================================================================

    /// Impulse noise filter for 2-D grayscale arrays.
    ///
    /// Raises ValueError if `window_size` is even, below 3 or negative, or if
    /// `sensitivity` is not a positive finite number.
    #[pyclass(name = "AdaptiveWeightedFilter", frozen)]
    pub struct PyAdaptiveWeightedFilter {
        inner: Filter,
    }

    #[pymethods]
    impl PyAdaptiveWeightedFilter {
        #[new]
        #[pyo3(signature = (window_size=5, sensitivity=10.0))]
        fn new(window_size: i64, sensitivity: f64) -> PyResult<Self> {
            let window_size = usize::try_from(window_size).map_err(|_| {
                PyValueError::new_err(format!(
                    "Invalid filter configuration: window size must be positive, got {window_size}"
                ))
            })?;
            let inner = Filter::new(window_size, sensitivity)
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
            Ok(PyAdaptiveWeightedFilter { inner })
        }

        #[getter]
        fn window_size(&self) -> usize {
            self.inner.config().window_size()
        }

        #[getter]
        fn sensitivity(&self) -> f64 {
            self.inner.config().sensitivity()
        }

        /// Filter a uint8 image.
        fn process<'py>(
            &self,
            py: Python<'py>,
            image: PyReadonlyArray2<'py, u8>,
        ) -> Bound<'py, PyArray2<u8>> {
            let result = self.inner.process(image.as_array());
            result.into_pyarray(py)
        }

        /// Filter a uint16 image; it is coerced to 8 bit first and a
        /// `UserWarning` describes the coercion.
        fn process_u16<'py>(
            &self,
            py: Python<'py>,
            image: PyReadonlyArray2<'py, u16>,
        ) -> PyResult<Bound<'py, PyArray2<u8>>> {
            into_py_image(py, self.inner.process_any(image.as_array()))
        }

        /// Filter a float32 image; it is coerced to 8 bit first and a
        /// `UserWarning` describes the coercion.
        fn process_f32<'py>(
            &self,
            py: Python<'py>,
            image: PyReadonlyArray2<'py, f32>,
        ) -> PyResult<Bound<'py, PyArray2<u8>>> {
            into_py_image(py, self.inner.process_any(image.as_array()))
        }
    }

    // ========================================================================
    // Noise Generator
    // ========================================================================

    #[pyfunction]
    pub fn salt_and_pepper<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        density: f32,
        seed: u64,
    ) -> Bound<'py, PyArray2<u8>> {
        let result = noise_mod::add_salt_and_pepper(image.as_array(), density, seed);
        result.into_pyarray(py)
    }

    /// AWLF Rust extension module
    #[pymodule]
    pub fn awlf_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<PyAdaptiveWeightedFilter>()?;
        m.add_function(wrap_pyfunction!(salt_and_pepper, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::awlf_rust;
