//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file, then
//! workspace config files, then `TRAVELKIT__*` environment variables.

use crate::geo::{GeoPoint, ViewportPolicy};
use crate::logging::LoggingConfig;
use crate::query::FoldingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;

/// Nodeul station, the map screen's starting point
pub const DEFAULT_FALLBACK: GeoPoint = GeoPoint::new(37.5129, 126.9532);

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Catalog file (.json or .toml). Relative paths resolve against the workspace.
    /// The built-in sample catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Map framing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Location shown when there is nothing to frame
    #[serde(default = "default_fallback")]
    pub fallback: GeoPoint,

    #[serde(default = "default_min_span")]
    pub min_span_meters: f64,

    #[serde(default = "default_padding")]
    pub padding: f64,

    #[serde(default = "default_focus_span")]
    pub focus_span_meters: f64,
}

fn default_fallback() -> GeoPoint {
    DEFAULT_FALLBACK
}

fn default_min_span() -> f64 {
    ViewportPolicy::default().min_span_meters
}

fn default_padding() -> f64 {
    ViewportPolicy::default().padding
}

fn default_focus_span() -> f64 {
    ViewportPolicy::default().focus_span_meters
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            min_span_meters: default_min_span(),
            padding: default_padding(),
            focus_span_meters: default_focus_span(),
        }
    }
}

impl MapConfig {
    pub fn viewport_policy(&self) -> ViewportPolicy {
        ViewportPolicy {
            min_span_meters: self.min_span_meters,
            padding: self.padding,
            focus_span_meters: self.focus_span_meters,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.fallback.is_valid() {
            return Err(format!("fallback {} is not a valid coordinate", self.fallback));
        }
        if !is_positive(self.min_span_meters) {
            return Err("min_span_meters must be positive".to_string());
        }
        if !is_positive(self.focus_span_meters) {
            return Err("focus_span_meters must be positive".to_string());
        }
        if !self.padding.is_finite() || self.padding < 1.0 {
            return Err("padding must be at least 1.0".to_string());
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// List query settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub folding: FoldingStrategy,

    /// Row cap for list commands when no `--limit` is given
    #[serde(default)]
    pub default_limit: Option<usize>,
}

impl QueryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == Some(0) {
            return Err("default_limit must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Map(String),
    Query(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Map(msg) => write!(f, "Map: {}", msg),
            ValidationError::Query(msg) => write!(f, "Query: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TravelConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.map.validate() {
            errors.push(ValidationError::Map(e));
        }
        if let Err(e) = self.query.validate() {
            errors.push(ValidationError::Query(e));
        }
        if let Err(e) = crate::logging::validate(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Catalog path resolved against `workspace_root`, if one is configured.
    pub fn catalog_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                workspace_root.join(p)
            }
        })
    }
}
