//! Metric kinds and their tagged results.
//!
//! Each [`MetricKind`] maps to one pure evaluator with the signature
//! `(&Palette, &MetricsConfig) -> MetricResult`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::distance::{
    classify_noticeable, pairwise_distances, DistanceMatrix, NoticeableMatrix,
    DEFAULT_NOTICEABLE_THRESHOLD,
};
use super::lightness::{lightness_report, LightnessBounds, LightnessReport};
use crate::api::MetricsError;
use crate::palette::Palette;

/// Tunables shared by all metric evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    /// ΔE00 above which a pair counts as noticeably different
    pub noticeable_threshold: f64,
    /// Acceptable L* band
    pub lightness: LightnessBounds,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            noticeable_threshold: DEFAULT_NOTICEABLE_THRESHOLD,
            lightness: LightnessBounds::default(),
        }
    }
}

/// The metrics that can be requested for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Pairwise ΔE00 matrix with noticeable-difference flags
    PerceptualDistance,
    /// Per-color L* with min/max bound flags
    Lightness,
}

impl MetricKind {
    /// Every supported kind, in default output order.
    pub const ALL: [MetricKind; 2] = [MetricKind::PerceptualDistance, MetricKind::Lightness];

    /// Name used in output documents and configuration.
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::PerceptualDistance => "perceptual_distance",
            MetricKind::Lightness => "lightness",
        }
    }

    /// Comma-separated list of all valid names.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The evaluator for this kind.
    pub fn evaluator(self) -> fn(&Palette, &MetricsConfig) -> MetricResult {
        match self {
            MetricKind::PerceptualDistance => perceptual_distance,
            MetricKind::Lightness => lightness,
        }
    }

    /// Run this metric over a palette.
    #[inline]
    pub fn evaluate(self, palette: &Palette, config: &MetricsConfig) -> MetricResult {
        (self.evaluator())(palette, config)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| MetricsError::UnsupportedMetric {
                name: s.to_string(),
            })
    }
}

/// Output of the perceptual distance metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PerceptualDistanceData {
    /// Palette labels, in matrix row/column order
    pub colors: Vec<String>,
    /// Lab values as `[L, a, b]`
    pub lab: Vec<[f64; 3]>,
    /// ΔE00 matrix
    pub distances: DistanceMatrix,
    /// `distances > threshold`, cell by cell
    pub noticeable: NoticeableMatrix,
}

/// Output of the lightness metric, column oriented.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LightnessData {
    /// L* of each color
    pub lightness: Vec<f64>,
    /// Lower bound used
    pub min_lightness: f64,
    /// Upper bound used
    pub max_lightness: f64,
    /// `lightness <= max_lightness`
    pub smaller_than_max: Vec<bool>,
    /// `lightness >= min_lightness`
    pub greater_than_min: Vec<bool>,
    /// Both bounds hold
    pub bounded_by_min_max: Vec<bool>,
}

impl LightnessData {
    /// Pivot per-color reports into columns.
    pub fn from_reports(reports: &[LightnessReport], bounds: LightnessBounds) -> Self {
        Self {
            lightness: reports.iter().map(|r| r.lightness).collect(),
            min_lightness: bounds.min,
            max_lightness: bounds.max,
            smaller_than_max: reports.iter().map(|r| r.below_max).collect(),
            greater_than_min: reports.iter().map(|r| r.above_min).collect(),
            bounded_by_min_max: reports.iter().map(|r| r.within_bounds).collect(),
        }
    }
}

/// One computed metric, tagged with its kind.
///
/// Serializes as `{"method": "<name>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "method", content = "data", rename_all = "snake_case")
)]
pub enum MetricResult {
    /// Result of [`MetricKind::PerceptualDistance`]
    PerceptualDistance(PerceptualDistanceData),
    /// Result of [`MetricKind::Lightness`]
    Lightness(LightnessData),
}

impl MetricResult {
    /// The kind that produced this result.
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricResult::PerceptualDistance(_) => MetricKind::PerceptualDistance,
            MetricResult::Lightness(_) => MetricKind::Lightness,
        }
    }

    /// Output name of the producing kind.
    #[inline]
    pub fn method(&self) -> &'static str {
        self.kind().name()
    }
}

fn perceptual_distance(palette: &Palette, config: &MetricsConfig) -> MetricResult {
    let lab = palette.lab();
    let distances = pairwise_distances(&lab);
    let noticeable = classify_noticeable(&distances, config.noticeable_threshold);

    MetricResult::PerceptualDistance(PerceptualDistanceData {
        colors: palette.labels().into_iter().map(String::from).collect(),
        lab: lab.iter().map(|c| c.to_array()).collect(),
        distances,
        noticeable,
    })
}

fn lightness(palette: &Palette, config: &MetricsConfig) -> MetricResult {
    let reports = lightness_report(&palette.lab(), config.lightness);
    MetricResult::Lightness(LightnessData::from_reports(&reports, config.lightness))
}
