//! Colorteller - palette benchmarking
//!
//! Command-line front end for the `palette-metrics` engine: configuration,
//! palette documents and metric output files.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
