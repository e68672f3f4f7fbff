//! CIE XYZ color type and the D65 reference white
//!
//! XYZ is the intermediate between linear sRGB and Lab. Values here are on
//! the 0..=100 scale (Y = 100 for the reference white).

use super::linear_rgb::LinearRgb;

/// A reference white point in XYZ (0..=100 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// X tristimulus of the white
    pub x: f64,
    /// Y tristimulus of the white
    pub y: f64,
    /// Z tristimulus of the white
    pub z: f64,
}

/// CIE standard illuminant D65, 2° observer.
pub const D65: WhitePoint = WhitePoint {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// A color in CIE XYZ (0..=100 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus
    pub x: f64,
    /// Y tristimulus (luminance)
    pub y: f64,
    /// Z tristimulus
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB to XYZ with the standard D65 sRGB matrix.
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        Self {
            x: x * 100.0,
            y: y * 100.0,
            z: z * 100.0,
        }
    }
}
