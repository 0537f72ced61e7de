#![forbid(unsafe_code)]

//! Software RGBA raster implementing [`Surface`].
//!
//! Ovals are rasterized by pixel-center coverage (no anti-aliasing): a pixel
//! belongs to the oval inscribed in `rect` when its center `(x + 0.5, y + 0.5)`
//! satisfies the ellipse equation. Strokes are centered on the outline, half
//! the width inside and half outside.
//!
//! Glyph rasterization is left to the host font stack: text is recorded as
//! [`TextRun`]s with its resolved baseline, so callers can verify placement
//! or composite glyphs themselves.

use std::path::Path;

use circlet_core::geometry::Rect;
use circlet_style::Argb;
use image::{ImageResult, Rgba, RgbaImage};

use crate::display_list::{DEFAULT_ASCENT_RATIO, DEFAULT_DESCENT_RATIO};
use crate::surface::{Fill, FontMetrics, Stroke, Surface, TextPaint};

/// A text run recorded by [`Pixmap::draw_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub baseline_y: f32,
    pub paint: TextPaint,
}

/// An owned RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Pixmap {
    image: RgbaImage,
    text_runs: Vec<TextRun>,
    ascent_ratio: f32,
    descent_ratio: f32,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            text_runs: Vec::new(),
            ascent_ratio: DEFAULT_ASCENT_RATIO,
            descent_ratio: DEFAULT_DESCENT_RATIO,
        }
    }

    /// Use different font metric ratios (per pixel of text size).
    #[must_use]
    pub fn with_font_ratios(mut self, ascent: f32, descent: f32) -> Self {
        self.ascent_ratio = ascent;
        self.descent_ratio = descent;
        self
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill every pixel with `color` and forget recorded text.
    pub fn clear(&mut self, color: Argb) {
        let px = Rgba(color.to_rgba_bytes());
        for p in self.image.pixels_mut() {
            *p = px;
        }
        self.text_runs.clear();
    }

    /// Color at `(x, y)`; out-of-bounds reads are transparent.
    pub fn pixel(&self, x: i32, y: i32) -> Argb {
        if !self.bounds().contains(x, y) {
            return Argb::TRANSPARENT;
        }
        Argb::from_rgba_bytes(self.image.get_pixel(x as u32, y as u32).0)
    }

    /// Text recorded so far, in draw order.
    #[inline]
    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Borrow the underlying raster.
    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying raster.
    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode the raster as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    #[inline]
    fn blend(&mut self, x: i32, y: i32, src: Argb) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let out = src.over(Argb::from_rgba_bytes(dst.0));
        *dst = Rgba(out.to_rgba_bytes());
    }

    /// Pixel rows/cols covered by `rect` grown by `grow` and clipped to the raster.
    fn clip_span(&self, rect: Rect, grow: i32) -> Option<(i32, i32, i32, i32)> {
        let bounds = self.bounds();
        let grown = rect.inset(-grow, -grow);
        let normalized = Rect::new(
            grown.left.min(grown.right),
            grown.top.min(grown.bottom),
            grown.left.max(grown.right),
            grown.top.max(grown.bottom),
        );
        normalized
            .intersection_opt(&bounds)
            .map(|r| (r.left, r.top, r.right, r.bottom))
    }
}

/// Ellipse inscribed in a rect, in continuous pixel coordinates.
#[derive(Debug, Clone, Copy)]
struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    fn inscribed(rect: Rect) -> Self {
        Self {
            cx: rect.exact_center_x(),
            cy: rect.exact_center_y(),
            // Extents in f32 so edges at opposite ends of i32 cannot overflow.
            rx: (rect.right as f32 - rect.left as f32) / 2.0,
            ry: (rect.bottom as f32 - rect.top as f32) / 2.0,
        }
    }

    /// Normalized squared distance of the pixel center from the center,
    /// with radii grown by `delta`. `None` when a radius collapses.
    #[inline]
    fn norm(&self, x: i32, y: i32, delta: f32) -> Option<f32> {
        let rx = self.rx + delta;
        let ry = self.ry + delta;
        if rx <= 0.0 || ry <= 0.0 {
            return None;
        }
        let dx = (x as f32 + 0.5 - self.cx) / rx;
        let dy = (y as f32 + 0.5 - self.cy) / ry;
        Some(dx * dx + dy * dy)
    }
}

impl Surface for Pixmap {
    fn fill_oval(&mut self, oval: Rect, fill: &Fill) {
        if oval.right <= oval.left || oval.bottom <= oval.top {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip_span(oval, 0) else {
            return;
        };
        let ellipse = Ellipse::inscribed(oval);
        for y in y0..y1 {
            for x in x0..x1 {
                if ellipse.norm(x, y, 0.0).is_some_and(|d| d <= 1.0) {
                    self.blend(x, y, fill.color_at(x, y));
                }
            }
        }
    }

    fn stroke_oval(&mut self, oval: Rect, stroke: Stroke) {
        if oval.right <= oval.left || oval.bottom <= oval.top {
            return;
        }
        let half = if stroke.width > 0.0 { stroke.width / 2.0 } else { 0.5 };
        let Some((x0, y0, x1, y1)) = self.clip_span(oval, half.ceil() as i32) else {
            return;
        };
        let ellipse = Ellipse::inscribed(oval);
        for y in y0..y1 {
            for x in x0..x1 {
                let inside_outer = ellipse.norm(x, y, half).is_some_and(|d| d <= 1.0);
                let inside_inner = ellipse.norm(x, y, -half).is_some_and(|d| d < 1.0);
                if inside_outer && !inside_inner {
                    self.blend(x, y, stroke.color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, paint: &TextPaint) {
        self.text_runs.push(TextRun {
            text: text.to_owned(),
            x,
            baseline_y,
            paint: *paint,
        });
    }

    fn font_metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: size * self.ascent_ratio,
            descent: size * self.descent_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn red() -> Argb {
        Argb::rgb(255, 0, 0)
    }

    #[test]
    fn new_pixmap_is_transparent() {
        let p = Pixmap::new(4, 4);
        assert_eq!(p.pixel(0, 0), Argb::TRANSPARENT);
        assert_eq!(p.pixel(-1, 0), Argb::TRANSPARENT);
        assert_eq!(p.pixel(4, 0), Argb::TRANSPARENT);
    }

    #[test]
    fn fill_oval_covers_center_not_corners() {
        let mut p = Pixmap::new(20, 20);
        p.fill_oval(Rect::from_size(20, 20), &Fill::Solid(red()));
        assert_eq!(p.pixel(10, 10), red());
        assert_eq!(p.pixel(0, 10), red());
        assert_eq!(p.pixel(10, 0), red());
        assert_eq!(p.pixel(0, 0), Argb::TRANSPARENT);
        assert_eq!(p.pixel(19, 19), Argb::TRANSPARENT);
    }

    #[test]
    fn fill_oval_is_symmetric() {
        let mut p = Pixmap::new(21, 21);
        p.fill_oval(Rect::from_size(21, 21), &Fill::Solid(red()));
        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(p.pixel(x, y), p.pixel(20 - x, y), "mirror x at ({x},{y})");
                assert_eq!(p.pixel(x, y), p.pixel(x, 20 - y), "mirror y at ({x},{y})");
            }
        }
    }

    #[test]
    fn fill_oval_clips_to_raster() {
        let mut p = Pixmap::new(10, 10);
        p.fill_oval(Rect::new(-10, -10, 30, 30), &Fill::Solid(red()));
        assert_eq!(p.pixel(0, 0), red());
        assert_eq!(p.pixel(9, 9), red());
    }

    #[test]
    fn empty_or_inverted_oval_draws_nothing() {
        let mut p = Pixmap::new(10, 10);
        p.fill_oval(Rect::new(5, 5, 5, 9), &Fill::Solid(red()));
        p.fill_oval(Rect::new(8, 8, 2, 2), &Fill::Solid(red()));
        p.stroke_oval(
            Rect::new(8, 8, 2, 2),
            Stroke {
                width: 2.0,
                color: red(),
            },
        );
        assert!(p.as_image().pixels().all(|px| px.0[3] == 0));
    }

    #[test]
    fn texture_fill_samples_surface_coordinates() {
        let mut tex = RgbaImage::new(10, 10);
        for (x, _, px) in tex.enumerate_pixels_mut() {
            *px = if x < 5 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            };
        }
        let mut p = Pixmap::new(10, 10);
        p.fill_oval(Rect::from_size(10, 10), &Fill::Texture(Arc::new(tex)));
        assert_eq!(p.pixel(2, 5), Argb::rgb(255, 0, 0));
        assert_eq!(p.pixel(7, 5), Argb::rgb(0, 0, 255));
        assert_eq!(p.pixel(0, 0), Argb::TRANSPARENT);
    }

    #[test]
    fn stroke_leaves_center_untouched() {
        let mut p = Pixmap::new(40, 40);
        p.stroke_oval(
            Rect::from_size(40, 40).inset(2, 2),
            Stroke {
                width: 4.0,
                color: red(),
            },
        );
        assert_eq!(p.pixel(20, 20), Argb::TRANSPARENT);
        // Outline passes through the middle of each edge at x/y = 2.
        assert_eq!(p.pixel(1, 20), red());
        assert_eq!(p.pixel(3, 20), red());
        assert_eq!(p.pixel(38, 20), red());
        assert_eq!(p.pixel(20, 0), red());
        // Outside the outer half-width.
        assert_eq!(p.pixel(0, 0), Argb::TRANSPARENT);
        // Inside the inner half-width.
        assert_eq!(p.pixel(6, 20), Argb::TRANSPARENT);
    }

    #[test]
    fn zero_width_stroke_is_hairline() {
        let mut p = Pixmap::new(20, 20);
        p.stroke_oval(
            Rect::from_size(20, 20),
            Stroke {
                width: 0.0,
                color: red(),
            },
        );
        assert_eq!(p.pixel(0, 10), red());
        assert_eq!(p.pixel(10, 10), Argb::TRANSPARENT);
    }

    #[test]
    fn translucent_fill_blends_over_existing() {
        let mut p = Pixmap::new(4, 4);
        p.clear(Argb::BLACK);
        p.fill_oval(
            Rect::new(-4, -4, 8, 8),
            &Fill::Solid(Argb::argb(128, 255, 255, 255)),
        );
        let c = p.pixel(1, 1);
        assert_eq!(c.a(), 255);
        assert_eq!(c.r(), 128);
    }

    #[test]
    fn full_range_oval_does_not_overflow() {
        let mut p = Pixmap::new(8, 4);
        p.fill_oval(Rect::new(i32::MIN, 0, i32::MAX, 1), &Fill::Solid(red()));
        p.stroke_oval(
            Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX),
            Stroke {
                width: f32::MAX,
                color: red(),
            },
        );
        assert_eq!(p.pixel(0, 0), red());
        assert_eq!(p.pixel(7, 0), red());
    }

    #[test]
    fn png_export_roundtrips_pixels() {
        let mut p = Pixmap::new(12, 9);
        p.clear(Argb::argb(255, 10, 20, 30));
        p.fill_oval(Rect::from_size(12, 9), &Fill::Solid(red()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        p.save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded, p.clone().into_image());
        assert_eq!(decoded.get_pixel(6, 4), &Rgba([255, 0, 0, 255]));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn text_is_recorded_with_metrics() {
        let mut p = Pixmap::new(10, 10).with_font_ratios(-0.8, 0.2);
        let m = p.font_metrics(10.0);
        assert_eq!(m.ascent, -8.0);
        assert_eq!(m.descent, 2.0);
        let paint = TextPaint {
            color: Argb::WHITE,
            size: 10.0,
            align: Default::default(),
        };
        p.draw_text("AB", 5.0, 8.0, &paint);
        assert_eq!(p.text_runs().len(), 1);
        assert_eq!(p.text_runs()[0].text, "AB");
        p.clear(Argb::TRANSPARENT);
        assert!(p.text_runs().is_empty());
    }
}
