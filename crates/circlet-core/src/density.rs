#![forbid(unsafe_code)]

//! Density-independent units and their conversion to device pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-device scale factor from density-independent units (dp) to pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f32);

impl Density {
    /// Baseline density where one dp is one pixel.
    pub const BASELINE: Self = Self(1.0);

    /// Create a density from a scale factor.
    ///
    /// Non-finite or non-positive factors fall back to [`Density::BASELINE`].
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::BASELINE
        }
    }

    /// The raw scale factor.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> f32 {
        self.0
    }

    /// Convert dp to fractional pixels.
    #[inline]
    #[must_use]
    pub fn dp_to_px(self, dp: f32) -> f32 {
        dp * self.0
    }

    /// Convert dp to whole pixels, truncating toward zero.
    #[inline]
    #[must_use]
    pub fn dp_to_px_truncated(self, dp: f32) -> u32 {
        let px = self.dp_to_px(dp);
        if px <= 0.0 { 0 } else { px as u32 }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// A length as written in configuration: either dp or raw pixels.
///
/// Serialized as a string with a unit suffix (`"2dp"`, `"3.5px"`). A bare
/// number is read as dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    Dp(f32),
    Px(f32),
}

impl Dimension {
    /// Resolve to fractional pixels at the given density.
    #[must_use]
    pub fn to_px(self, density: Density) -> f32 {
        match self {
            Self::Dp(dp) => density.dp_to_px(dp),
            Self::Px(px) => px,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dp(v) => write!(f, "{v}dp"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

impl From<Dimension> for String {
    fn from(dim: Dimension) -> Self {
        dim.to_string()
    }
}

/// Error returned when a dimension string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionParseError {
    input: String,
}

impl fmt::Display for DimensionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dimension {:?}: expected <number>dp or <number>px", self.input)
    }
}

impl std::error::Error for DimensionParseError {}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || DimensionParseError {
            input: s.to_owned(),
        };
        let (number, make): (&str, fn(f32) -> Dimension) =
            if let Some(n) = trimmed.strip_suffix("dp").or_else(|| trimmed.strip_suffix("dip")) {
                (n, Dimension::Dp)
            } else if let Some(n) = trimmed.strip_suffix("px") {
                (n, Dimension::Px)
            } else {
                (trimmed, Dimension::Dp)
            };
        let value: f32 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() || value < 0.0 {
            return Err(err());
        }
        Ok(make(value))
    }
}

impl TryFrom<String> for Dimension {
    type Error = DimensionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_scales_by_density() {
        let d = Density::new(2.625);
        assert_eq!(d.dp_to_px(40.0), 105.0);
        assert_eq!(d.dp_to_px_truncated(2.0), 5);
    }

    #[test]
    fn invalid_density_falls_back_to_baseline() {
        assert_eq!(Density::new(0.0), Density::BASELINE);
        assert_eq!(Density::new(-3.0), Density::BASELINE);
        assert_eq!(Density::new(f32::NAN), Density::BASELINE);
    }

    #[test]
    fn parse_units() {
        assert_eq!("2dp".parse::<Dimension>(), Ok(Dimension::Dp(2.0)));
        assert_eq!("2dip".parse::<Dimension>(), Ok(Dimension::Dp(2.0)));
        assert_eq!(" 3.5px ".parse::<Dimension>(), Ok(Dimension::Px(3.5)));
        assert_eq!("4".parse::<Dimension>(), Ok(Dimension::Dp(4.0)));
    }

    #[test]
    fn parse_rejects_garbage_and_negatives() {
        assert!("wide".parse::<Dimension>().is_err());
        assert!("-1dp".parse::<Dimension>().is_err());
        assert!("dp".parse::<Dimension>().is_err());
    }

    #[test]
    fn dimension_resolves_to_px() {
        let d = Density::new(3.0);
        assert_eq!(Dimension::Dp(2.0).to_px(d), 6.0);
        assert_eq!(Dimension::Px(2.0).to_px(d), 2.0);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let dim = Dimension::Px(1.5);
        assert_eq!(dim.to_string().parse::<Dimension>(), Ok(dim));
    }
}
