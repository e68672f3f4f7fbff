#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! palette-metrics: perceptual distance and lightness metrics for palettes
//!
//! This library answers two questions about a set of colors: can any two of
//! them be told apart, and is each of them light or dark enough to read?
//!
//! # Quick Start
//!
//! The [`PaletteMetrics`] builder is the primary entry point:
//!
//! ```
//! use palette_metrics::{MetricKind, MetricResult, PaletteMetrics};
//!
//! let metrics = PaletteMetrics::from_hex(&["#8de4d3", "#344b46", "#74ee65"]).unwrap();
//! let results = metrics.compute(&MetricKind::ALL);
//!
//! let MetricResult::PerceptualDistance(data) = &results[0] else { unreachable!() };
//! assert_eq!(data.distances.len(), 3);
//! assert!(data.noticeable.get(0, 1));
//! ```
//!
//! # Color Science
//!
//! ## Pipeline
//!
//! ```text
//! "#8de4d3"                (hex string)
//!     |
//!     v
//! Rgb                      (8-bit channels)
//!     |
//!     v
//! Srgb / LinearRgb         (÷255, IEC 61966-2-1 gamma decode)
//!     |
//!     v
//! Xyz                      (sRGB D65 matrix, 0..=100 scale)
//!     |
//!     v
//! Lab                      (CIE L*a*b*, D65 white 95.047 / 100 / 108.883)
//!     |
//!     +---> CIEDE2000 pairwise matrix ---> noticeable (ΔE00 > threshold)
//!     +---> CIEDE2000 distance chain
//!     +---> L* bound checks
//! ```
//!
//! ## Why CIEDE2000
//!
//! Euclidean distance in Lab (ΔE76) over-reports differences between
//! saturated colors and under-reports them for blues and near-neutrals.
//! CIEDE2000 adds lightness (SL), chroma (SC) and hue (SH) weighting plus a
//! rotation term (RT) for the blue region, and is the metric the
//! noticeable-difference literature is calibrated against. A ΔE00 above 5
//! reads as two different colors to most observers, which is the default
//! threshold here.
//!
//! ## Determinism
//!
//! Every function is pure. The same palette and configuration produce the
//! same output, bit for bit, on the same platform.

pub mod api;
pub mod color;
pub mod metrics;
pub mod palette;


pub use api::{compute_metrics, MetricsError, PaletteMetrics};
pub use color::{normalize_hex, Lab, LinearRgb, Rgb, Srgb, Xyz};
pub use metrics::{
    ciede2000, classify_noticeable, distance_chain, lightness_report, pairwise_distances,
    DistanceChain, DistanceMatrix, LightnessBounds, LightnessData, LightnessReport, MetricKind,
    MetricResult, MetricsConfig, NoticeableMatrix, PerceptualDistanceData, ReferenceColor,
};
pub use palette::{Palette, PaletteEntry, ParseColorError};
