#![forbid(unsafe_code)]

//! Geometric primitives in device pixels.

/// An axis-aligned rectangle in device pixels.
///
/// Edges follow the host view convention: `left`/`top` are inclusive,
/// `right`/`bottom` are exclusive, origin at the top-left of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle anchored at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_i32(width), clamp_i32(height))
    }

    /// Width in pixels. Negative extents collapse to zero.
    #[inline]
    pub const fn width(&self) -> u32 {
        let w = self.right.saturating_sub(self.left);
        if w < 0 { 0 } else { w as u32 }
    }

    /// Height in pixels. Negative extents collapse to zero.
    #[inline]
    pub const fn height(&self) -> u32 {
        let h = self.bottom.saturating_sub(self.top);
        if h < 0 { 0 } else { h as u32 }
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Horizontal center, not rounded.
    #[inline]
    pub fn exact_center_x(&self) -> f32 {
        (self.left as f32 + self.right as f32) * 0.5
    }

    /// Vertical center, not rounded.
    #[inline]
    pub fn exact_center_y(&self) -> f32 {
        (self.top as f32 + self.bottom as f32) * 0.5
    }

    /// Check if a pixel lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Move the left/right edges in by `dx` and the top/bottom edges in by `dy`.
    ///
    /// Negative values grow the rectangle. The result may be inverted when the
    /// inset exceeds half the extent, matching the host canvas semantics.
    #[inline]
    pub const fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_sub(dx),
            self.bottom.saturating_sub(dy),
        )
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }
}

#[inline]
const fn clamp_i32(v: u32) -> i32 {
    if v > i32::MAX as u32 {
        i32::MAX
    } else {
        v as i32
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides.
    #[inline]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if width equals height.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }
}
