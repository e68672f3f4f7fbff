//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs. It holds the exact
//! linear value for each of the 256 possible 8-bit sRGB channel values.

include!(concat!(env!("OUT_DIR"), "/srgb8_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

/// IEC 61966-2-1 sRGB decoding for a normalized channel value.
///
/// Used for inputs that do not come from 8-bit channels. The table above is
/// generated from the same formula.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
