//! Property-based invariant tests for the raster path.
//!
//! 1. A crop plan always covers the target and centers the window.
//! 2. A crop plan never distorts: the scaled raster keeps the source's
//!    orientation (the longer source axis stays the longer scaled axis).
//! 3. Filled ovals never paint outside their bounding rect.
//! 4. Strokes stay within the rect grown by half the stroke width.

use circlet_core::geometry::Rect;
use circlet_render::pixmap::Pixmap;
use circlet_render::sampler::CropPlan;
use circlet_render::surface::{Fill, Stroke, Surface};
use circlet_style::Argb;
use proptest::prelude::*;

proptest! {
    #[test]
    fn crop_plan_covers_and_centers(
        src_w in 1u32..=4000,
        src_h in 1u32..=4000,
        side in 1u32..=600,
    ) {
        let plan = CropPlan::compute(src_w, src_h, side, side).unwrap();
        prop_assert!(plan.scaled_width >= side);
        prop_assert!(plan.scaled_height >= side);
        prop_assert!(plan.offset_x + side <= plan.scaled_width);
        prop_assert!(plan.offset_y + side <= plan.scaled_height);
        let excess_x = plan.scaled_width - side;
        let excess_y = plan.scaled_height - side;
        prop_assert_eq!(plan.offset_x, excess_x / 2);
        prop_assert_eq!(plan.offset_y, excess_y / 2);
        // Only the longer axis is ever cropped.
        prop_assert!(excess_x == 0 || excess_y == 0);
    }

    #[test]
    fn crop_plan_keeps_orientation(
        src_w in 1u32..=4000,
        src_h in 1u32..=4000,
        side in 1u32..=600,
    ) {
        let plan = CropPlan::compute(src_w, src_h, side, side).unwrap();
        if src_w > src_h {
            prop_assert!(plan.scaled_width >= plan.scaled_height);
        } else if src_h > src_w {
            prop_assert!(plan.scaled_height >= plan.scaled_width);
        } else {
            prop_assert_eq!(plan.scaled_width, plan.scaled_height);
        }
    }

    #[test]
    fn fill_stays_inside_rect(
        left in 0i32..20,
        top in 0i32..20,
        w in 1i32..30,
        h in 1i32..30,
    ) {
        let rect = Rect::new(left, top, left + w, top + h);
        let mut p = Pixmap::new(60, 60);
        p.fill_oval(rect, &Fill::Solid(Argb::WHITE));
        for y in 0..60 {
            for x in 0..60 {
                if p.pixel(x, y) != Argb::TRANSPARENT {
                    prop_assert!(rect.contains(x, y), "painted ({}, {}) outside {:?}", x, y, rect);
                }
            }
        }
    }

    #[test]
    fn stroke_stays_near_rect(
        left in 10i32..20,
        top in 10i32..20,
        w in 1i32..30,
        width in 0.0f32..8.0,
    ) {
        let rect = Rect::new(left, top, left + w, top + w);
        let mut p = Pixmap::new(64, 64);
        p.stroke_oval(rect, Stroke { width, color: Argb::WHITE });
        let grow = (width / 2.0).ceil().max(1.0) as i32;
        let outer = rect.inset(-grow, -grow);
        for y in 0..64 {
            for x in 0..64 {
                if p.pixel(x, y) != Argb::TRANSPARENT {
                    prop_assert!(outer.contains(x, y), "stroke at ({}, {}) outside {:?}", x, y, outer);
                }
            }
        }
    }
}
