//! Filter modules for impulse noise removal.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W) | u8 | Filtered directly |
//! | Grayscale16/32/float | (H, W) | u16, u32, i16, i32, f32, f64 | Coerced to u8 first |
//!
//! Color images are not supported.
//!
//! ## Architecture
//!
//! The adaptive filter is split into pure per-window pieces composed by one
//! orchestrating loop:
//! - **padding** - symmetric boundary extension so every pixel has a full window
//! - **window** - borrowed square neighborhood view
//! - **detect** - min/max impulse test
//! - **weight** - spatial x intensity weight function
//! - **restore** - weighted mean with median fallback
//! - **adaptive** - the filter itself, sequential and rayon-parallel
//!
//! Supporting modules: **config** (validated parameters), **depth** (bit depth
//! coercion) and **noise** (salt-and-pepper generator).

pub mod adaptive;
pub mod config;
pub mod depth;
pub mod detect;
pub mod noise;
pub mod padding;
pub mod restore;
pub mod weight;
pub mod window;

pub use adaptive::{AdaptiveWeightedFilter, FilterOutput};
pub use config::FilterConfig;
pub use depth::DepthCoercion;
pub use restore::Restoration;
