//! Engine configuration file support.
//!
//! Settings are read from a TOML file. Every section is optional and the
//! defaults reproduce the dashboard's fixed analysis constants, so an empty
//! file (or no file at all) yields the standard behaviour.
//!
//! ```toml
//! [data]
//! catalog_path = "data/satcat.tsv"
//!
//! [ridge]
//! grid_points = 500
//! bandwidth = 0.5
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// Environment variable overriding `data.catalog_path`.
pub const CATALOG_PATH_ENV: &str = "SATLIFE_CATALOG";

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub derive: DeriveSettings,
    #[serde(default)]
    pub ridge: RidgeSettings,
    #[serde(default)]
    pub orbit: OrbitSettings,
}

/// Location of the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

/// Record derivation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeriveSettings {
    /// Object types starting with this prefix are payloads.
    #[serde(default = "default_payload_prefix")]
    pub payload_prefix: String,
    /// Records with a longer lifespan are treated as data errors.
    #[serde(default = "default_max_lifespan_years")]
    pub max_lifespan_years: f64,
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
}

/// Density ridgeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeSettings {
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    /// Scale factor applied to the sample standard deviation to get the kernel width.
    #[serde(default = "default_bandwidth")]
    pub bandwidth: f64,
    /// Decades with fewer records are not estimated.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
    /// Vertical distance between consecutive ridges.
    #[serde(default = "default_overlap")]
    pub overlap: f64,
}

/// Orbit aggregation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSettings {
    #[serde(default = "default_top_groups")]
    pub top_groups: usize,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("satcat.tsv")
}

fn default_payload_prefix() -> String {
    "P".to_string()
}

fn default_max_lifespan_years() -> f64 {
    100.0
}

fn default_days_per_year() -> f64 {
    crate::time::JULIAN_YEAR_DAYS
}

fn default_grid_points() -> usize {
    500
}

fn default_bandwidth() -> f64 {
    0.5
}

fn default_min_group_size() -> usize {
    5
}

fn default_overlap() -> f64 {
    0.5
}

fn default_top_groups() -> usize {
    4
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
        }
    }
}

impl Default for DeriveSettings {
    fn default() -> Self {
        Self {
            payload_prefix: default_payload_prefix(),
            max_lifespan_years: default_max_lifespan_years(),
            days_per_year: default_days_per_year(),
        }
    }
}

impl Default for RidgeSettings {
    fn default() -> Self {
        Self {
            grid_points: default_grid_points(),
            bandwidth: default_bandwidth(),
            min_group_size: default_min_group_size(),
            overlap: default_overlap(),
        }
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            top_groups: default_top_groups(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(content).map_err(|e| {
            EngineError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the first `satlife.toml` found in the standard
    /// locations, falling back to defaults when there is none.
    ///
    /// Searches, in order:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> EngineResult<Self> {
        let search_paths = [
            PathBuf::from("satlife.toml"),
            PathBuf::from("rust_backend/satlife.toml"),
            PathBuf::from("../satlife.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No satlife.toml found, using default configuration");
        Ok(Self::default())
    }

    /// Apply environment overrides (`SATLIFE_CATALOG`).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
            if !path.trim().is_empty() {
                self.data.catalog_path = PathBuf::from(path);
            }
        }
        self
    }

    /// Reject settings the analysis cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |msg: String| Err(EngineError::Configuration(msg));

        if self.derive.payload_prefix.is_empty() {
            return invalid("derive.payload_prefix must not be empty".to_string());
        }
        if !(self.derive.max_lifespan_years.is_finite() && self.derive.max_lifespan_years > 0.0) {
            return invalid(format!(
                "derive.max_lifespan_years must be positive, got {}",
                self.derive.max_lifespan_years
            ));
        }
        if !(self.derive.days_per_year.is_finite() && self.derive.days_per_year > 0.0) {
            return invalid(format!(
                "derive.days_per_year must be positive, got {}",
                self.derive.days_per_year
            ));
        }
        if self.ridge.grid_points < 2 {
            return invalid(format!(
                "ridge.grid_points must be at least 2, got {}",
                self.ridge.grid_points
            ));
        }
        if !(self.ridge.bandwidth.is_finite() && self.ridge.bandwidth > 0.0) {
            return invalid(format!(
                "ridge.bandwidth must be positive, got {}",
                self.ridge.bandwidth
            ));
        }
        if !(self.ridge.overlap.is_finite() && self.ridge.overlap >= 0.0) {
            return invalid(format!(
                "ridge.overlap must be non-negative, got {}",
                self.ridge.overlap
            ));
        }
        if self.orbit.top_groups == 0 {
            return invalid("orbit.top_groups must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_dashboard_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.data.catalog_path, PathBuf::from("satcat.tsv"));
        assert_eq!(config.derive.payload_prefix, "P");
        assert_eq!(config.derive.max_lifespan_years, 100.0);
        assert_eq!(config.derive.days_per_year, 365.25);
        assert_eq!(config.ridge.grid_points, 500);
        assert_eq!(config.ridge.bandwidth, 0.5);
        assert_eq!(config.ridge.min_group_size, 5);
        assert_eq!(config.ridge.overlap, 0.5);
        assert_eq!(config.orbit.top_groups, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str("[ridge]\ngrid_points = 200\n").unwrap();
        assert_eq!(config.ridge.grid_points, 200);
        assert_eq!(config.ridge.bandwidth, 0.5);
        assert_eq!(config.orbit.top_groups, 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_toml_str("[ridge]\ngrid_points = 1\n").unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));

        let err = EngineConfig::from_toml_str("[ridge]\nbandwidth = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("bandwidth"));

        let err = EngineConfig::from_toml_str("[orbit]\ntop_groups = 0\n").unwrap_err();
        assert!(err.to_string().contains("top_groups"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml_str("[ridge\n").unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\ncatalog_path = \"/tmp/catalog.tsv\"\n").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data.catalog_path, PathBuf::from("/tmp/catalog.tsv"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/satlife.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
