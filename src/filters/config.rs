//! Filter configuration.
//!
//! A [`FilterConfig`] is validated once, at construction, and is immutable
//! afterwards. Every per-pixel function receives it (or the values derived
//! from it) explicitly.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Default neighborhood side length.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Default weight decay control.
pub const DEFAULT_SENSITIVITY: f64 = 10.0;

/// Validated `(window_size, sensitivity)` pair.
///
/// # Invariants
/// * `window_size` is odd and at least 3
/// * `sensitivity` is finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFilterConfig")]
pub struct FilterConfig {
    window_size: usize,
    sensitivity: f64,
}

impl FilterConfig {
    /// Validate and build a configuration.
    ///
    /// # Arguments
    /// * `window_size` - Side length of the square neighborhood (odd, >= 3)
    /// * `sensitivity` - Inverse decay rate of the weights (> 0). Larger values
    ///   flatten the weight curve, smaller values sharpen it.
    pub fn new(window_size: usize, sensitivity: f64) -> Result<Self, FilterError> {
        if window_size % 2 == 0 {
            return Err(FilterError::invalid_configuration(format!(
                "window size must be odd, got {window_size}"
            )));
        }
        if window_size < 3 {
            return Err(FilterError::invalid_configuration(format!(
                "window size must be at least 3, got {window_size}"
            )));
        }
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(FilterError::invalid_configuration(format!(
                "sensitivity must be a positive finite number, got {sensitivity}"
            )));
        }

        Ok(FilterConfig {
            window_size,
            sensitivity,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Border width added on every side: `(window_size - 1) / 2`.
    pub fn pad(&self) -> usize {
        self.window_size / 2
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Unvalidated wire form; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawFilterConfig {
    window_size: usize,
    sensitivity: f64,
}

impl Default for RawFilterConfig {
    fn default() -> Self {
        RawFilterConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl TryFrom<RawFilterConfig> for FilterConfig {
    type Error = FilterError;

    fn try_from(raw: RawFilterConfig) -> Result<Self, Self::Error> {
        FilterConfig::new(raw.window_size, raw.sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FilterConfig::default();
        assert_eq!(config.window_size(), 5);
        assert_eq!(config.sensitivity(), 10.0);
        assert_eq!(config.pad(), 2);
        assert_eq!(FilterConfig::new(5, 10.0).unwrap(), config);
    }

    #[test]
    fn test_even_window_rejected() {
        for size in [0, 2, 4, 6, 10] {
            let err = FilterConfig::new(size, 10.0).unwrap_err();
            assert!(matches!(err, FilterError::InvalidConfiguration { .. }));
        }
    }

    #[test]
    fn test_window_of_one_rejected() {
        assert!(FilterConfig::new(1, 10.0).is_err());
    }

    #[test]
    fn test_odd_windows_accepted() {
        for size in [3, 5, 7, 9, 21] {
            let config = FilterConfig::new(size, 1.0).unwrap();
            assert_eq!(config.pad(), (size - 1) / 2);
        }
    }

    #[test]
    fn test_bad_sensitivity_rejected() {
        for sensitivity in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(FilterConfig::new(3, sensitivity).is_err());
        }
        assert!(FilterConfig::new(3, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: FilterConfig = serde_json::from_str(r#"{"window_size": 7}"#).unwrap();
        assert_eq!(config.window_size(), 7);
        assert_eq!(config.sensitivity(), DEFAULT_SENSITIVITY);

        let config: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<FilterConfig, _> =
            serde_json::from_str(r#"{"window_size": 4, "sensitivity": 10.0}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("window size must be odd"));

        let result: Result<FilterConfig, _> = serde_json::from_str(r#"{"sensitivity": -2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = FilterConfig::new(9, 2.5).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"window_size\":9"));
        let back: FilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
