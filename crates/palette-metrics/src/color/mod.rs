//! Color types and conversion utilities
//!
//! Each step of the sRGB -> Lab pipeline has its own type, so a value can
//! only be fed to the math that expects it:
//!
//! - [`Rgb`]: 8-bit channels, parsed from hex strings
//! - [`Srgb`]: gamma-encoded, normalized to 0.0..=1.0
//! - [`LinearRgb`]: linear light intensity
//! - [`Xyz`]: CIE XYZ on the 0..=100 scale
//! - [`Lab`]: CIE L*a*b* relative to D65
//!
//! # Example
//!
//! ```
//! use palette_metrics::{Lab, Rgb};
//!
//! let rgb: Rgb = "#8de4d3".parse().unwrap();
//! let lab = Lab::from(rgb);
//! assert!(lab.l > 80.0);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod rgb;
mod srgb;
mod xyz;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use rgb::{normalize_hex, Rgb};
pub use srgb::Srgb;
pub use xyz::{WhitePoint, Xyz, D65};
