#![forbid(unsafe_code)]

//! Measure constraints handed down by the host layout pass.
//!
//! A [`MeasureSpec`] pairs a [`MeasureMode`] with a pixel size, one per axis.
//! Specs are totally ordered the same way the host's packed integer specs
//! compare as signed 32-bit values: first by mode
//! (`AtMost < Unspecified < Exactly`, since the at-most tag sets the sign
//! bit), then by size.
//! "The smaller of two constraints" is therefore [`Ord::min`] under that
//! order, which is what [`measure_square`] relies on.

use crate::geometry::Size;

/// How the parent constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MeasureMode {
    /// The child may be at most `size` pixels.
    AtMost,
    /// The parent imposes no constraint.
    #[default]
    Unspecified,
    /// The child must be exactly `size` pixels.
    Exactly,
}

/// A single-axis measure constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    /// Create a spec from a mode and size.
    #[inline]
    pub const fn new(mode: MeasureMode, size: u32) -> Self {
        Self { mode, size }
    }

    /// No constraint. The size is ignored.
    #[inline]
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Exactly `size` pixels.
    #[inline]
    pub const fn exactly(size: u32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    /// At most `size` pixels.
    #[inline]
    pub const fn at_most(size: u32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }
}

/// Resolve the size a widget should default to under `spec`.
///
/// Unspecified axes fall back to `default_px`; bounded axes take the
/// parent's size as-is.
#[inline]
pub const fn resolve_default_size(spec: MeasureSpec, default_px: u32) -> u32 {
    match spec.mode {
        MeasureMode::Unspecified => default_px,
        MeasureMode::Exactly | MeasureMode::AtMost => spec.size,
    }
}

/// Propose a square size for a pair of axis constraints.
///
/// The smaller spec (see module docs) is resolved with
/// [`resolve_default_size`], then raised to `min_size` so an explicit size
/// override is never undercut by the parent.
pub fn measure_square(
    width: MeasureSpec,
    height: MeasureSpec,
    default_px: u32,
    min_size: u32,
) -> Size {
    let side = resolve_default_size(width.min(height), default_px).max(min_size);
    Size::square(side)
}
