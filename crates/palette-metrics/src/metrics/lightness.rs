//! Lightness (L*) bound checks.
//!
//! Very dark or very light colors read poorly against common backgrounds, so
//! each palette color's L* is checked against a configurable band.

use crate::color::Lab;

/// Inclusive L* band a readable color should fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessBounds {
    /// Lowest acceptable L*
    pub min: f64,
    /// Highest acceptable L*
    pub max: f64,
}

impl LightnessBounds {
    /// Default lower bound.
    pub const DEFAULT_MIN: f64 = 25.0;
    /// Default upper bound.
    pub const DEFAULT_MAX: f64 = 85.0;

    /// Create a band. `min > max` is allowed; nothing then passes both checks.
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for LightnessBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// Lightness classification of one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessReport {
    /// L* of the color
    pub lightness: f64,
    /// `lightness >= min`
    pub above_min: bool,
    /// `lightness <= max`
    pub below_max: bool,
    /// `above_min && below_max`
    pub within_bounds: bool,
}

impl LightnessReport {
    /// Classify one Lab color.
    pub fn evaluate(color: Lab, bounds: LightnessBounds) -> Self {
        let above_min = color.l >= bounds.min;
        let below_max = color.l <= bounds.max;
        Self {
            lightness: color.l,
            above_min,
            below_max,
            within_bounds: above_min && below_max,
        }
    }
}

/// Classify every color against `bounds`, in input order.
pub fn lightness_report(colors: &[Lab], bounds: LightnessBounds) -> Vec<LightnessReport> {
    colors
        .iter()
        .map(|&c| LightnessReport::evaluate(c, bounds))
        .collect()
}
