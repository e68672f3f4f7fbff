//! Normalized sRGB color type
//!
//! sRGB with channels scaled to 0.0..=1.0. Still gamma-encoded: it has to be
//! linearized before any colorimetric math.

use super::rgb::Rgb;

/// A gamma-encoded sRGB color with channels in 0.0..=1.0.
///
/// 8-bit colors are linearized through the build-time table
/// (`LinearRgb::from(Rgb)`). Going through `Srgb` applies the transfer
/// formula instead; it serves non-8-bit inputs and is the reference the
/// table is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from normalized values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Srgb {
    /// Scale each 8-bit channel into 0.0..=1.0.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: f64::from(rgb.r) / 255.0,
            g: f64::from(rgb.g) / 255.0,
            b: f64::from(rgb.b) / 255.0,
        }
    }
}
