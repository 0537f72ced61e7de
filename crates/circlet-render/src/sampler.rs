#![forbid(unsafe_code)]

//! Center-crop sampling of a source image into a target raster.
//!
//! The source is scaled (aspect preserved) until it covers the target, then
//! the centered target-sized window is cut out. The longer axis loses the
//! same amount on both sides (the odd pixel, if any, goes to the far side).
//!
//! [`CropPlan`] describes that in scaled-raster coordinates. The scaled
//! raster itself is never built: the window is mapped back onto the source,
//! cut out there, and only that region is resized to the target. Memory use
//! is therefore bounded by the source and the target, whatever the aspect
//! ratio.

use circlet_core::debug;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// The integer plan for one center crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropPlan {
    /// Width of the source once scaled to cover the target.
    pub scaled_width: u32,
    /// Height of the source once scaled to cover the target.
    pub scaled_height: u32,
    /// Left edge of the crop window within the scaled raster.
    pub offset_x: u32,
    /// Top edge of the crop window within the scaled raster.
    pub offset_y: u32,
    /// Output width.
    pub width: u32,
    /// Output height.
    pub height: u32,
}

impl CropPlan {
    /// Plan a crop of a `src_width × src_height` image into `width × height`.
    ///
    /// Returns `None` when any dimension is zero.
    #[must_use]
    pub fn compute(src_width: u32, src_height: u32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || src_width == 0 || src_height == 0 {
            return None;
        }
        let src_w = src_width as f32;
        let src_h = src_height as f32;
        let w_factor = if src_w > src_h { src_w / src_h } else { 1.0 };
        let h_factor = if src_h > src_w { src_h / src_w } else { 1.0 };
        // Excess is truncated toward zero.
        let dx = (width as f32 * (w_factor - 1.0)) as u32;
        let dy = (height as f32 * (h_factor - 1.0)) as u32;

        Some(Self {
            scaled_width: width.saturating_add(dx),
            scaled_height: height.saturating_add(dy),
            offset_x: dx / 2,
            offset_y: dy / 2,
            width,
            height,
        })
    }

    /// The source-pixel region that lands in the crop window.
    ///
    /// Returns `(x, y, width, height)` in source coordinates, widened to
    /// whole pixels and clamped to the source. Never empty.
    #[must_use]
    pub fn source_window(&self, src_width: u32, src_height: u32) -> (u32, u32, u32, u32) {
        let (x, w) = map_span(self.offset_x, self.width, self.scaled_width, src_width);
        let (y, h) = map_span(self.offset_y, self.height, self.scaled_height, src_height);
        (x, y, w, h)
    }
}

/// Map `[offset, offset + len)` on a `scaled`-long axis onto a `src`-long axis.
fn map_span(offset: u32, len: u32, scaled: u32, src: u32) -> (u32, u32) {
    let scaled = u64::from(scaled.max(1));
    let src = u64::from(src);
    let start = u64::from(offset) * src / scaled;
    let end = (u64::from(offset) + u64::from(len)) * src;
    let end = end.div_ceil(scaled).min(src);
    let start = start.min(src.saturating_sub(1));
    let end = end.max(start + 1);
    // Both values are bounded by `src`, which came from a u32.
    (start as u32, (end - start) as u32)
}

/// Scale `src` to cover `width × height` and cut out the centered window.
///
/// Returns `None` for zero-sized targets or sources.
#[must_use]
pub fn sample_center_crop(src: &RgbaImage, width: u32, height: u32) -> Option<RgbaImage> {
    let plan = CropPlan::compute(src.width(), src.height(), width, height)?;
    let (win_x, win_y, win_w, win_h) = plan.source_window(src.width(), src.height());
    debug!(
        src_width = src.width(),
        src_height = src.height(),
        scaled_width = plan.scaled_width,
        scaled_height = plan.scaled_height,
        offset_x = plan.offset_x,
        offset_y = plan.offset_y,
        win_x,
        win_y,
        win_w,
        win_h,
        "center crop"
    );
    let window = imageops::crop_imm(src, win_x, win_y, win_w, win_h);
    Some(imageops::resize(&*window, plan.width, plan.height, FilterType::Triangle))
}
