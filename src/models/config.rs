use std::path::{Path, PathBuf};

use palette_metrics::{LightnessBounds, MetricKind, MetricsConfig, MetricsError};
use serde::Deserialize;

use crate::error::AppError;

/// Default configuration shipped with the binary and written by `init`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../config.yaml");

/// Environment variable naming the config file
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Metric names, in output order
    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,

    /// ΔE00 above which two colors count as noticeably different
    #[serde(default = "default_noticeable_threshold")]
    pub noticeable_threshold: f64,

    #[serde(default = "default_min_lightness")]
    pub min_lightness: f64,

    #[serde(default = "default_max_lightness")]
    pub max_lightness: f64,
}

fn default_metrics() -> Vec<String> {
    MetricKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

fn default_noticeable_threshold() -> f64 {
    palette_metrics::metrics::DEFAULT_NOTICEABLE_THRESHOLD
}

fn default_min_lightness() -> f64 {
    LightnessBounds::DEFAULT_MIN
}

fn default_max_lightness() -> f64 {
    LightnessBounds::DEFAULT_MAX
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces `metrics` when non-empty
    pub metrics: Vec<String>,
    pub noticeable_threshold: Option<f64>,
    pub min_lightness: Option<f64>,
    pub max_lightness: Option<f64>,
}

impl AppConfig {
    /// Config path from the command line, else from `CONFIG_FILE`
    pub fn resolve_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        cli_path.or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Strict load: any read or parse failure is an error
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_yaml_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    metrics = config.metrics.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load the config for a command.
    ///
    /// A path given on the command line must load. The `CONFIG_FILE` path
    /// falls back to defaults like [`AppConfig::load`].
    pub fn load_for_command(cli_path: Option<&Path>) -> Result<Self, AppError> {
        match cli_path {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                tracing::info!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            None => {
                let env_path = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
                Ok(Self::load(env_path.as_deref()))
            }
        }
    }

    /// Write the embedded default config to `path`.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<(), AppError> {
        if path.exists() && !force {
            return Err(AppError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        std::fs::write(path, DEFAULT_CONFIG_YAML).map_err(|e| AppError::io(path, e))?;
        tracing::info!(path = %path.display(), "Wrote default config");
        Ok(())
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if !overrides.metrics.is_empty() {
            self.metrics = overrides.metrics;
        }
        if let Some(threshold) = overrides.noticeable_threshold {
            self.noticeable_threshold = threshold;
        }
        if let Some(min) = overrides.min_lightness {
            self.min_lightness = min;
        }
        if let Some(max) = overrides.max_lightness {
            self.max_lightness = max;
        }
        self
    }

    /// Parse the configured metric names
    pub fn metric_kinds(&self) -> Result<Vec<MetricKind>, MetricsError> {
        self.metrics.iter().map(|name| name.parse()).collect()
    }

    pub fn metrics_config(&self) -> MetricsConfig {
        MetricsConfig {
            noticeable_threshold: self.noticeable_threshold,
            lightness: LightnessBounds {
                min: self.min_lightness,
                max: self.max_lightness,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            noticeable_threshold: default_noticeable_threshold(),
            min_lightness: default_min_lightness(),
            max_lightness: default_max_lightness(),
        }
    }
}
