#![forbid(unsafe_code)]

//! Packed ARGB colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 32-bit color packed as `0xAARRGGBB` (straight alpha).
///
/// This is the host's native color integer layout, so values round-trip
/// through persisted state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Create a color with explicit alpha.
    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[r, g, b, a]` order, as stored by RGBA rasters.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Build a color from `[r, g, b, a]` bytes.
    #[inline]
    pub const fn from_rgba_bytes(px: [u8; 4]) -> Self {
        Self::argb(px[3], px[0], px[1], px[2])
    }

    #[inline]
    const fn div_round_u8(numer: u64, denom: u64) -> u8 {
        debug_assert!(denom != 0);
        let v = (numer + (denom / 2)) / denom;
        if v > 255 { 255 } else { v as u8 }
    }

    /// Porter-Duff SourceOver: `self` over `dst`.
    ///
    /// Straight alpha; the exact rational form is rounded once at the end.
    #[inline]
    pub fn over(self, dst: Self) -> Self {
        let s_a = self.a() as u64;
        if s_a == 255 {
            return self;
        }
        if s_a == 0 {
            return dst;
        }

        let d_a = dst.a() as u64;
        let inv_s_a = 255 - s_a;

        // numer_a = 255*s_a + d_a*(255 - s_a), in the 255^2 domain
        let numer_a = 255 * s_a + d_a * inv_s_a;
        if numer_a == 0 {
            return Self::TRANSPARENT;
        }
        let out_a = Self::div_round_u8(numer_a, 255);

        let channel = |s: u8, d: u8| {
            Self::div_round_u8((s as u64) * s_a * 255 + (d as u64) * d_a * inv_s_a, numer_a)
        };
        Self::argb(
            out_a,
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
        )
    }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: s.to_owned(),
        };
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for Argb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: expected #RRGGBB or #AARRGGBB", self.input)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let c = Argb(0x80_11_22_33);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0x11, 0x22, 0x33));
        assert_eq!(c.to_rgba_bytes(), [0x11, 0x22, 0x33, 0x80]);
        assert_eq!(Argb::from_rgba_bytes(c.to_rgba_bytes()), c);
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(Argb::WHITE.0, 0xFFFF_FFFF);
        assert_eq!(Argb::BLACK.0, 0xFF00_0000);
    }

    #[test]
    fn over_opaque_and_transparent_shortcuts() {
        let dst = Argb::rgb(10, 20, 30);
        assert_eq!(Argb::WHITE.over(dst), Argb::WHITE);
        assert_eq!(Argb::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn over_half_white_on_black() {
        let src = Argb::argb(128, 255, 255, 255);
        let out = src.over(Argb::BLACK);
        assert_eq!(out.a(), 255);
        assert_eq!(out.r(), 128);
        assert_eq!(out.g(), out.b());
    }

    #[test]
    fn over_onto_transparent_keeps_src_color() {
        let src = Argb::argb(64, 200, 100, 50);
        let out = src.over(Argb::TRANSPARENT);
        assert_eq!(out, src);
    }

    #[test]
    fn parse_rgb_is_opaque() {
        assert_eq!(Argb::from_hex("#7BC862"), Ok(Argb(0xFF7B_C862)));
        assert_eq!(Argb::from_hex("#7bc862"), Ok(Argb(0xFF7B_C862)));
    }

    #[test]
    fn parse_argb_keeps_alpha() {
        assert_eq!(Argb::from_hex("#807BC862"), Ok(Argb(0x807B_C862)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Argb::from_hex("7BC862").is_err());
        assert!(Argb::from_hex("#7BC86").is_err());
        assert!(Argb::from_hex("#+7BC862").is_err());
        assert!(Argb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn display_picks_short_form_when_opaque() {
        assert_eq!(Argb(0xFF2136F3).to_string(), "#2136F3");
        assert_eq!(Argb(0x102136F3).to_string(), "#102136F3");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Argb(0xFFE17076)).unwrap();
        assert_eq!(json, "\"#E17076\"");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Argb(0xFFE17076));
        assert!(serde_json::from_str::<Argb>("\"red\"").is_err());
    }
}
