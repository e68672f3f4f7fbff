//! Palette metrics
//!
//! - [`distance`]: CIEDE2000 and the pairwise distance matrix
//! - [`chain`]: distances between neighbouring colors, optionally sorted
//! - [`lightness`]: L* bound checks
//! - [`kind`]: the metric enum and tagged results

pub mod chain;
pub mod distance;
pub mod kind;
pub mod lightness;

pub use chain::{
    consecutive_distances, distance_chain, sort_by_reference, DistanceChain, ReferenceColor,
};
pub use distance::{
    ciede2000, classify_noticeable, is_noticeable, pairwise_distances, DistanceMatrix,
    NoticeableMatrix, DEFAULT_NOTICEABLE_THRESHOLD,
};
pub use kind::{
    LightnessData, MetricKind, MetricResult, MetricsConfig, PerceptualDistanceData,
};
pub use lightness::{lightness_report, LightnessBounds, LightnessReport};
