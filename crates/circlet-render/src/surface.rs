#![forbid(unsafe_code)]

//! The drawing contract between a widget and its host.
//!
//! A [`Surface`] accepts the three primitives the circle widgets need:
//! filled ovals, stroked ovals, and horizontally aligned text on a baseline.
//! Hosts implement it over their own graphics stack; [`DisplayList`] and
//! [`Pixmap`] are the in-crate implementations.
//!
//! [`DisplayList`]: crate::display_list::DisplayList
//! [`Pixmap`]: crate::pixmap::Pixmap

use std::sync::Arc;

use circlet_core::geometry::Rect;
use circlet_style::{Argb, BorderStyle};
use image::RgbaImage;

/// What to fill an oval with.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// A single color.
    Solid(Argb),
    /// A texture anchored at the surface origin, edge pixels clamped
    /// outside its extent.
    Texture(Arc<RgbaImage>),
}

impl Fill {
    /// Color of the fill at surface pixel `(x, y)`.
    ///
    /// Textures are sampled with clamp tiling. An empty texture yields
    /// [`Argb::TRANSPARENT`].
    pub fn color_at(&self, x: i32, y: i32) -> Argb {
        match self {
            Self::Solid(c) => *c,
            Self::Texture(tex) => {
                let (w, h) = tex.dimensions();
                if w == 0 || h == 0 {
                    return Argb::TRANSPARENT;
                }
                let sx = x.clamp(0, w as i32 - 1) as u32;
                let sy = y.clamp(0, h as i32 - 1) as u32;
                Argb::from_rgba_bytes(tex.get_pixel(sx, sy).0)
            }
        }
    }
}

/// Stroke parameters. The stroke is centered on the oval outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Width in pixels. Zero draws a one-pixel hairline.
    pub width: f32,
    pub color: Argb,
}

impl From<BorderStyle> for Stroke {
    fn from(style: BorderStyle) -> Self {
        Self {
            width: style.width_px,
            color: style.color,
        }
    }
}

/// Horizontal placement of text relative to its anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Paint for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub color: Argb,
    /// Text size in pixels.
    pub size: f32,
    pub align: TextAlign,
}

/// Vertical font metrics at a given text size.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Offset to subtract from a box's vertical center to get a baseline
    /// that centers the glyphs vertically.
    #[inline]
    pub fn center_offset(&self) -> f32 {
        (self.descent + self.ascent) / 2.0
    }

    /// Baseline that vertically centers text on `center_y`.
    #[inline]
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y - self.center_offset()
    }
}

/// A target for draw commands.
pub trait Surface {
    /// Fill the oval inscribed in `oval`.
    fn fill_oval(&mut self, oval: Rect, fill: &Fill);

    /// Stroke the outline of the oval inscribed in `oval`.
    fn stroke_oval(&mut self, oval: Rect, stroke: Stroke);

    /// Draw `text` with its baseline at `baseline_y`, aligned on `x`.
    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, paint: &TextPaint);

    /// Font metrics for text drawn at `size` pixels.
    fn font_metrics(&self, size: f32) -> FontMetrics;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_oval(&mut self, oval: Rect, fill: &Fill) {
        (**self).fill_oval(oval, fill);
    }

    fn stroke_oval(&mut self, oval: Rect, stroke: Stroke) {
        (**self).stroke_oval(oval, stroke);
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, paint: &TextPaint) {
        (**self).draw_text(text, x, baseline_y, paint);
    }

    fn font_metrics(&self, size: f32) -> FontMetrics {
        (**self).font_metrics(size)
    }
}
