use std::path::PathBuf;

use palette_metrics::MetricsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("No colors given (use --hex or --palette)")]
    NoColors,

    #[error("Invalid palette document: {0}")]
    PaletteDocument(#[source] serde_json::Error),

    #[error("Config error in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite {} (use --force)", .0.display())]
    AlreadyExists(PathBuf),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_no_colors() {
        let error = AppError::NoColors;
        assert_eq!(error.to_string(), "No colors given (use --hex or --palette)");
    }

    #[test]
    fn test_app_error_from_metrics_error() {
        let app_error: AppError = MetricsError::EmptyPalette.into();
        match app_error {
            AppError::Metrics(MetricsError::EmptyPalette) => {}
            _ => panic!("Expected Metrics variant"),
        }
        assert_eq!(
            AppError::from(MetricsError::EmptyPalette).to_string(),
            "Metrics error: palette cannot be empty"
        );
    }

    #[test]
    fn test_app_error_io() {
        let error = AppError::io(
            "/tmp/out/metrics.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error.to_string(), "IO error on /tmp/out/metrics.json: denied");
    }

    #[test]
    fn test_app_error_already_exists() {
        let error = AppError::AlreadyExists(PathBuf::from("config.yaml"));
        assert_eq!(
            error.to_string(),
            "Refusing to overwrite config.yaml (use --force)"
        );
    }
}
