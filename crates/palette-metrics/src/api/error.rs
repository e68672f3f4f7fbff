//! Unified error type for the palette-metrics public API.

use thiserror::Error;

use crate::metrics::MetricKind;
use crate::palette::ParseColorError;

/// Errors raised while validating metric inputs.
///
/// All of them are detected before any metric is computed, so a failed call
/// never leaves a partial result behind.
///
/// # Example
///
/// ```
/// use palette_metrics::{MetricsError, Palette};
///
/// fn load() -> Result<Palette, MetricsError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// # load().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// A palette color is not a 6-digit hex string
    #[error("color #{index} is not a valid hex color: {source}")]
    InvalidFormat {
        /// Position of the offending color in the palette
        index: usize,
        /// What was wrong with it
        #[source]
        source: ParseColorError,
    },

    /// No colors were supplied
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A metric name with no corresponding engine
    #[error("unsupported metric {name:?} (expected one of: {})", MetricKind::valid_names())]
    UnsupportedMetric {
        /// The name as requested
        name: String,
    },
}
