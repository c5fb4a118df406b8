//! Error types for filter construction and the binding layers.

use thiserror::Error;

/// Errors that can occur while configuring or feeding the filter.
///
/// Pixel processing itself never fails: once a filter exists, `process`
/// always returns a complete image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid filter configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Window must be square with an odd side, got {rows}x{cols}")]
    InvalidWindow { rows: usize, cols: usize },

    #[error("Buffer of {len} samples does not match a {width}x{height} image")]
    Shape {
        len: usize,
        width: usize,
        height: usize,
    },
}

impl FilterError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        FilterError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
