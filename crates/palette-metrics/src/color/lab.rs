//! CIE L*a*b* perceptual color space
//!
//! Lab is the space the CIEDE2000 color difference is defined on. Conversion
//! goes RGB -> normalized sRGB -> linear RGB -> XYZ -> Lab, always relative to
//! the D65 white.

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::xyz::{WhitePoint, Xyz, D65};

/// A color in CIE L*a*b* space (D65 white).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// `a` and `b` are unbounded; sRGB colors stay within about -128..=127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness L*
    pub l: f64,
    /// Green-red axis a*
    pub a: f64,
    /// Blue-yellow axis b*
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_metrics::Lab;
    ///
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(gray.chroma(), 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert XYZ to Lab relative to an arbitrary white point.
    pub fn from_xyz_with_white(xyz: Xyz, white: WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Chroma C*ab, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Components as `[L, a, b]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

/// Lab companding function with the 6/29 breakpoint.
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBE: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBE {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

impl From<Xyz> for Lab {
    /// Convert XYZ to Lab with the D65 white.
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz_with_white(xyz, D65)
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Rgb> for Lab {
    /// Full pipeline from an 8-bit sRGB color.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_metrics::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 1e-3);
    /// ```
    fn from(rgb: Rgb) -> Self {
        Self::from(LinearRgb::from(rgb))
    }
}
