#![forbid(unsafe_code)]

//! Core: pixel geometry, measure constraints, density units, and logging.

pub mod density;
pub mod geometry;
pub mod logging;
pub mod measure;

pub use density::{Density, Dimension, DimensionParseError};
pub use geometry::{Rect, Size};
pub use measure::{MeasureMode, MeasureSpec, measure_square, resolve_default_size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
