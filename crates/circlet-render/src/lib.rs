#![forbid(unsafe_code)]

//! Render kernel: the draw contract, a recording surface, a software
//! rasterizer, and center-crop image sampling.

pub mod display_list;
pub mod pixmap;
pub mod sampler;
pub mod surface;

pub use display_list::{DisplayList, DrawOp};
pub use pixmap::{Pixmap, TextRun};
pub use sampler::{CropPlan, sample_center_crop};
pub use surface::{Fill, FontMetrics, Stroke, Surface, TextAlign, TextPaint};
