//! Benchmark runs: resolve colors and settings, then call the metric engine.

use palette_metrics::{
    compute_metrics, DistanceChain, MetricKind, MetricResult, MetricsConfig, PaletteMetrics,
    ReferenceColor,
};

use crate::error::AppError;
use crate::models::AppConfig;

/// Everything a metrics computation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRequest {
    pub hex_strings: Vec<String>,
    pub kinds: Vec<MetricKind>,
    pub config: MetricsConfig,
}

impl BenchmarkRequest {
    /// Build a request from resolved colors and the effective config.
    ///
    /// Unknown metric names fail here, before any color is parsed.
    pub fn from_config(hex_strings: Vec<String>, config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            hex_strings,
            kinds: config.metric_kinds()?,
            config: config.metrics_config(),
        })
    }
}

pub fn run_benchmark(request: &BenchmarkRequest) -> Result<Vec<MetricResult>, AppError> {
    tracing::info!(
        colors = request.hex_strings.len(),
        metrics = request.kinds.len(),
        threshold = request.config.noticeable_threshold,
        "Running benchmark"
    );

    let results = compute_metrics(&request.hex_strings, &request.kinds, &request.config)?;
    Ok(results)
}

pub fn run_chain(
    hex_strings: &[String],
    sort: Option<ReferenceColor>,
    threshold: f64,
) -> Result<DistanceChain, AppError> {
    tracing::info!(colors = hex_strings.len(), sorted = sort.is_some(), "Running distance chain");

    let metrics = PaletteMetrics::from_hex(hex_strings)?.noticeable_threshold(threshold);
    Ok(metrics.distance_chain(sort))
}
