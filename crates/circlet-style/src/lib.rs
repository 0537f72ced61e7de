#![forbid(unsafe_code)]

//! Style primitives: colors, the initials palette, and paint styles.

pub mod color;
pub mod paint;
pub mod palette;

pub use color::{Argb, ColorParseError};
pub use paint::{BorderStyle, InitialsStyle};
pub use palette::{
    DEFAULT_INITIALS, PALETTE, initials_to_color, palette_index, raw_palette_index, selector_byte,
};
