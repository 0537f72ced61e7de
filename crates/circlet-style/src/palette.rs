#![forbid(unsafe_code)]

//! Deterministic initials-to-background mapping.
//!
//! The mapping is cosmetic, not a hash: it looks at a single byte of the
//! text and picks one of eight fixed background colors.
//!
//! # Numeric domain
//!
//! The byte is the low 8 bits of the first UTF-16 code unit of the text,
//! reinterpreted as a **signed** 8-bit integer `b`. The raw index is
//!
//! ```text
//! d     = b / 8            (real division)
//! index = trunc((d - trunc(d)) * 8)
//! ```
//!
//! which lies in `-7..=7`. Negative raw indices (first code unit with the
//! high bit of its low byte set, e.g. `'É'`, `'€'`) wrap by adding the
//! palette size. The net effect equals `b mod 8` (Euclidean), i.e. the low
//! three bits of the code unit.

use crate::color::Argb;

/// Initials used when the caller supplies an empty string.
pub const DEFAULT_INITIALS: &str = "??";

/// Background palette, in selection order.
pub const PALETTE: [Argb; 8] = [
    Argb(0xFF7B_C862),
    Argb(0xFFE1_7076),
    Argb(0xFFFA_A774),
    Argb(0xFF6E_C9CB),
    Argb(0xFF65_AADD),
    Argb(0xFFA6_95E7),
    Argb(0xFFEE_7AAE),
    Argb(0xFF21_36F3),
];

const PALETTE_LEN: i32 = PALETTE.len() as i32;

/// The signed selector byte of `text`.
///
/// Empty text is read as [`DEFAULT_INITIALS`].
#[must_use]
pub fn selector_byte(text: &str) -> i8 {
    let unit = text
        .encode_utf16()
        .next()
        .or_else(|| DEFAULT_INITIALS.encode_utf16().next())
        .unwrap_or(u16::from(b'?'));
    unit as u8 as i8
}

/// Raw palette index from the real-division formula. May be negative.
#[must_use]
pub fn raw_palette_index(byte: i8) -> i32 {
    let len = f64::from(PALETTE_LEN);
    let d = f64::from(byte) / len;
    ((d - d.trunc()) * len) as i32
}

/// Palette index in `0..8`, wrapping negative raw indices.
#[must_use]
pub fn palette_index(byte: i8) -> usize {
    raw_palette_index(byte).rem_euclid(PALETTE_LEN) as usize
}

/// Background color for the given initials.
#[must_use]
pub fn initials_to_color(text: &str) -> Argb {
    PALETTE[palette_index(selector_byte(text))]
}
