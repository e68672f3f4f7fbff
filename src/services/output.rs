//! Output files for metric results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppError;

/// File name written inside a `--target` folder
pub const METRICS_FILE_NAME: &str = "metrics.json";

/// Locations derived from an output folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub target: PathBuf,
    pub metrics_to: PathBuf,
}

/// Create `target` (and its parents) and return where metrics go.
pub fn prepare_paths(target: &Path) -> Result<OutputPaths, AppError> {
    std::fs::create_dir_all(target).map_err(|e| AppError::io(target, e))?;
    tracing::debug!(target = %target.display(), "Prepared output folder");

    Ok(OutputPaths {
        target: target.to_path_buf(),
        metrics_to: target.join(METRICS_FILE_NAME),
    })
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, AppError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(AppError::Serialize)
}

/// Write `value` as compact JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = to_json(value, false)?;
    std::fs::write(path, json).map_err(|e| AppError::io(path, e))?;
    tracing::info!(path = %path.display(), "Wrote metrics");
    Ok(())
}
