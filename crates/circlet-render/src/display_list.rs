#![forbid(unsafe_code)]

//! A [`Surface`] that records draw commands instead of rasterizing them.
//!
//! Hosts with their own graphics stack replay the recorded [`DrawOp`]s;
//! tests use the list to assert on exact geometry without pixel fuzz.

use circlet_core::geometry::Rect;

use crate::surface::{Fill, FontMetrics, Stroke, Surface, TextPaint};

/// Default ascent ratio (negative, above the baseline) for recording surfaces.
pub const DEFAULT_ASCENT_RATIO: f32 = -0.928;
/// Default descent ratio (positive, below the baseline) for recording surfaces.
pub const DEFAULT_DESCENT_RATIO: f32 = 0.244;

/// One recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillOval {
        oval: Rect,
        fill: Fill,
    },
    StrokeOval {
        oval: Rect,
        stroke: Stroke,
    },
    Text {
        text: String,
        x: f32,
        baseline_y: f32,
        paint: TextPaint,
    },
}

/// Ordered list of recorded draw commands.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    ascent_ratio: f32,
    descent_ratio: f32,
}

impl DisplayList {
    /// Create an empty list using the default font metrics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
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

    /// Recorded commands in draw order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop all recorded commands, keeping the metrics.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Replay every recorded command onto another surface.
    pub fn replay(&self, target: &mut impl Surface) {
        for op in &self.ops {
            match op {
                DrawOp::FillOval { oval, fill } => target.fill_oval(*oval, fill),
                DrawOp::StrokeOval { oval, stroke } => target.stroke_oval(*oval, *stroke),
                DrawOp::Text {
                    text,
                    x,
                    baseline_y,
                    paint,
                } => target.draw_text(text, *x, *baseline_y, paint),
            }
        }
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DisplayList {
    fn fill_oval(&mut self, oval: Rect, fill: &Fill) {
        self.ops.push(DrawOp::FillOval {
            oval,
            fill: fill.clone(),
        });
    }

    fn stroke_oval(&mut self, oval: Rect, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeOval { oval, stroke });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, paint: &TextPaint) {
        self.ops.push(DrawOp::Text {
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
    use crate::surface::TextAlign;
    use circlet_style::Argb;

    fn paint() -> TextPaint {
        TextPaint {
            color: Argb::WHITE,
            size: 12.0,
            align: TextAlign::Center,
        }
    }

    #[test]
    fn records_in_order() {
        let mut list = DisplayList::new();
        list.fill_oval(Rect::from_size(10, 10), &Fill::Solid(Argb::BLACK));
        list.draw_text("AB", 5.0, 6.0, &paint());
        list.stroke_oval(
            Rect::from_size(10, 10),
            Stroke {
                width: 2.0,
                color: Argb::WHITE,
            },
        );

        assert_eq!(list.len(), 3);
        assert!(matches!(list.ops()[0], DrawOp::FillOval { .. }));
        assert!(matches!(list.ops()[1], DrawOp::Text { ref text, .. } if text == "AB"));
        assert!(matches!(list.ops()[2], DrawOp::StrokeOval { .. }));
    }

    #[test]
    fn metrics_scale_with_size() {
        let list = DisplayList::new().with_font_ratios(-1.0, 0.5);
        let m = list.font_metrics(20.0);
        assert_eq!(m.ascent, -20.0);
        assert_eq!(m.descent, 10.0);
    }

    #[test]
    fn replay_reproduces_commands() {
        let mut list = DisplayList::new();
        list.fill_oval(Rect::from_size(4, 4), &Fill::Solid(Argb::WHITE));
        list.draw_text("Z", 1.0, 2.0, &paint());

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy.ops(), list.ops());
    }

    #[test]
    fn clear_empties() {
        let mut list = DisplayList::new();
        list.fill_oval(Rect::from_size(4, 4), &Fill::Solid(Argb::WHITE));
        list.clear();
        assert!(list.is_empty());
    }
}
