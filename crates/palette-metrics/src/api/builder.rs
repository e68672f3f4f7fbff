//! PaletteMetrics builder -- the primary entry point for the crate.
//!
//! [`PaletteMetrics`] owns a validated [`Palette`] plus a [`MetricsConfig`]
//! and evaluates any requested set of metrics over it.

use crate::metrics::{
    distance_chain, DistanceChain, LightnessBounds, MetricKind, MetricResult, MetricsConfig,
    ReferenceColor,
};
use crate::palette::Palette;

use super::MetricsError;

/// Metric evaluation for one palette.
///
/// # Design
///
/// - Constructor requires a valid, non-empty [`Palette`]
/// - Configuration methods consume and return `self`
/// - [`compute()`](Self::compute) takes `&self`, so one builder can answer
///   several requests
///
/// # Example
///
/// ```
/// use palette_metrics::{MetricKind, PaletteMetrics};
///
/// let metrics = PaletteMetrics::from_hex(&["#8de4d3", "#344b46"])
///     .unwrap()
///     .noticeable_threshold(10.0)
///     .lightness_bounds(20.0, 90.0);
///
/// let results = metrics.compute(&[MetricKind::Lightness, MetricKind::PerceptualDistance]);
/// assert_eq!(results[0].method(), "lightness");
/// assert_eq!(results[1].method(), "perceptual_distance");
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMetrics {
    palette: Palette,
    config: MetricsConfig,
}

impl PaletteMetrics {
    /// Wrap an already validated palette with the default configuration.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            config: MetricsConfig::default(),
        }
    }

    /// Parse hex strings into a palette.
    ///
    /// # Errors
    ///
    /// [`MetricsError::EmptyPalette`] or [`MetricsError::InvalidFormat`].
    pub fn from_hex<S: AsRef<str>>(hex_strings: &[S]) -> Result<Self, MetricsError> {
        Palette::from_hex(hex_strings).map(Self::new)
    }

    /// Replace the whole configuration.
    #[inline]
    pub fn config(mut self, config: MetricsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ΔE00 threshold for "noticeable".
    #[inline]
    pub fn noticeable_threshold(mut self, threshold: f64) -> Self {
        self.config.noticeable_threshold = threshold;
        self
    }

    /// Set the acceptable L* band.
    #[inline]
    pub fn lightness_bounds(mut self, min: f64, max: f64) -> Self {
        self.config.lightness = LightnessBounds::new(min, max);
        self
    }

    /// The palette being measured.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The active configuration.
    #[inline]
    pub fn settings(&self) -> &MetricsConfig {
        &self.config
    }

    /// Evaluate the requested metrics.
    ///
    /// Results follow the order of `kinds`. A kind listed more than once is
    /// evaluated once, at its first position.
    pub fn compute(&self, kinds: &[MetricKind]) -> Vec<MetricResult> {
        let mut seen = Vec::with_capacity(kinds.len());
        let mut results = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            if seen.contains(&kind) {
                tracing::debug!(metric = %kind, "Skipping duplicate metric request");
                continue;
            }
            seen.push(kind);

            tracing::debug!(metric = %kind, colors = self.palette.len(), "Computing metric");
            results.push(kind.evaluate(&self.palette, &self.config));
        }

        results
    }

    /// Evaluate every supported metric in default order.
    pub fn compute_all(&self) -> Vec<MetricResult> {
        self.compute(&MetricKind::ALL)
    }

    /// Distance chain over this palette with the configured threshold.
    pub fn distance_chain(&self, sort: Option<ReferenceColor>) -> DistanceChain {
        distance_chain(&self.palette, sort, self.config.noticeable_threshold)
    }
}
