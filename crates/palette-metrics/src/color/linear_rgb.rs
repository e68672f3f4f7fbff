//! Linear RGB color type
//!
//! Linear RGB is proportional to light intensity. The XYZ matrix is defined on
//! linear values, so every conversion to Lab passes through here.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::rgb::Rgb;
use super::srgb::Srgb;

/// A color in linear RGB color space (sRGB primaries, D65 white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode the sRGB transfer curve (IEC 61966-2-1).
    ///
    /// Formula path; `From<Rgb>` is the table path used for palette colors.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

impl From<Rgb> for LinearRgb {
    /// Decode 8-bit channels through the build-time table.
    ///
    /// Produces the same values as going through [`Srgb`] first.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(rgb.r),
            g: srgb8_to_linear(rgb.g),
            b: srgb8_to_linear(rgb.b),
        }
    }
}
