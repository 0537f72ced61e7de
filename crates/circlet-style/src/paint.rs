#![forbid(unsafe_code)]

//! Immutable paint styles.
//!
//! Styles are small `Copy` values. Setters on the widget build a new value
//! instead of mutating a shared paint object between draws.

use crate::color::Argb;

/// Stroke style of the ring drawn around the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Stroke width in pixels. Never negative.
    pub width_px: f32,
    /// Stroke color.
    pub color: Argb,
}

impl BorderStyle {
    /// Create a border style. Negative or non-finite widths clamp to zero.
    #[must_use]
    pub fn new(width_px: f32, color: Argb) -> Self {
        let width_px = if width_px.is_finite() { width_px.max(0.0) } else { 0.0 };
        Self { width_px, color }
    }

    /// Same style with a different width.
    #[must_use]
    pub fn with_width(self, width_px: f32) -> Self {
        Self::new(width_px, self.color)
    }

    /// Same style with a different color.
    #[must_use]
    pub fn with_color(self, color: Argb) -> Self {
        Self { color, ..self }
    }

    /// Half the stroke width, truncated to whole pixels.
    ///
    /// The ring is stroked along the view bounds inset by this amount so the
    /// outer half of the stroke stays inside the view.
    #[inline]
    #[must_use]
    pub fn half_inset(&self) -> i32 {
        (self.width_px / 2.0) as i32
    }
}

/// Text style for initials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialsStyle {
    /// Foreground color of the text.
    pub color: Argb,
    /// Text size as a fraction of the view height.
    pub size_ratio: f32,
}

impl InitialsStyle {
    /// Text size in pixels for a view of the given height.
    #[inline]
    #[must_use]
    pub fn text_size(&self, view_height: u32) -> f32 {
        view_height as f32 * self.size_ratio
    }
}

impl Default for InitialsStyle {
    fn default() -> Self {
        Self {
            color: Argb::WHITE,
            size_ratio: 0.33,
        }
    }
}
