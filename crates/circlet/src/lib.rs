#![forbid(unsafe_code)]

//! Circlet public facade crate.
//!
//! A circular avatar view: a center-cropped image when one is attached,
//! otherwise a palette-colored circle with initials, always with a ring
//! border. This crate re-exports the common types from the internal crates
//! and offers a prelude for day-to-day usage.
//!
//! ```
//! use circlet::prelude::*;
//!
//! let config = CircleConfig::default().with_initials("JD");
//! let mut view = CircleView::new(&config, Density::new(2.0));
//! let size = view.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
//! view.on_size_changed(size.width, size.height, 0, 0);
//!
//! let mut pixmap = Pixmap::new(size.width, size.height);
//! view.draw(&mut pixmap);
//! assert_eq!(pixmap.pixel(40, 40), initials_to_color("JD"));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use circlet_core::{
    Density, Dimension, DimensionParseError, MeasureMode, MeasureSpec, Rect, Size,
    measure_square, resolve_default_size,
};

// --- Style re-exports ------------------------------------------------------

pub use circlet_style::{
    Argb, BorderStyle, ColorParseError, DEFAULT_INITIALS, InitialsStyle, PALETTE,
    initials_to_color, palette_index,
};

// --- Render re-exports -----------------------------------------------------

pub use circlet_render::{
    CropPlan, DisplayList, DrawOp, Fill, FontMetrics, Pixmap, Stroke, Surface, TextAlign,
    TextPaint, TextRun, sample_center_crop,
};

// --- Widget re-exports -----------------------------------------------------

pub use circlet_widgets::{
    AvatarMode, CircleAvatar, CircleConfig, CircleSnapshot, CircleState, CircleView, ConfigError,
    HostState, ImageError, ImageSource, Invalidation, MemoryResources, ResourceId,
    ResourceResolver, StateError, Stateful, VersionedState, View, ViewBase, ViewSnapshot,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for circlet hosts.
#[derive(Debug)]
pub enum Error {
    /// Construction config could not be loaded.
    Config(ConfigError),
    /// An image could not be decoded or resolved.
    Image(ImageError),
    /// A saved snapshot could not be encoded or decoded.
    State(StateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Image(err) => write!(f, "{err}"),
            Self::State(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::State(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Self::Image(err)
    }
}

impl From<StateError> for Error {
    fn from(err: StateError) -> Self {
        Self::State(err)
    }
}

/// Standard result type for circlet APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Argb, AvatarMode, CircleConfig, CircleView, Density, Dimension, DisplayList, Error,
        ImageSource, Invalidation, MeasureSpec, Pixmap, Result, Size, Surface, View,
        ViewSnapshot, initials_to_color,
    };
}
