//! Public API for the palette-metrics crate.
//!
//! This module provides the high-level API: the [`PaletteMetrics`] builder,
//! the [`compute_metrics`] one-shot helper and the [`MetricsError`] type.

mod builder;
mod error;

pub use builder::PaletteMetrics;
pub use error::MetricsError;

use crate::metrics::{MetricKind, MetricResult, MetricsConfig};

/// Parse a palette and evaluate the requested metrics in one call.
///
/// # Errors
///
/// - [`MetricsError::EmptyPalette`] if `hex_strings` is empty
/// - [`MetricsError::InvalidFormat`] if any color fails to parse
///
/// # Example
///
/// ```
/// use palette_metrics::{compute_metrics, MetricKind, MetricsConfig, MetricsError};
///
/// let empty: [&str; 0] = [];
/// let err = compute_metrics(&empty, &MetricKind::ALL, &MetricsConfig::default());
/// assert_eq!(err, Err(MetricsError::EmptyPalette));
/// ```
pub fn compute_metrics<S: AsRef<str>>(
    hex_strings: &[S],
    kinds: &[MetricKind],
    config: &MetricsConfig,
) -> Result<Vec<MetricResult>, MetricsError> {
    let metrics = PaletteMetrics::from_hex(hex_strings)?.config(*config);
    Ok(metrics.compute(kinds))
}
