//! Error types for the travelkit core and its CLI surface.

use std::path::PathBuf;
use thiserror::Error;

/// Map framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// No points were supplied; the caller must pick a fallback region.
    #[error("Cannot frame an empty set of points")]
    EmptyInput,
}

/// Errors parsing a `lat,lon` coordinate string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePointError {
    #[error("Expected 'lat,lon', got '{0}'")]
    Malformed(String),

    #[error("Invalid number '{0}' in coordinate")]
    InvalidNumber(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),
}

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Top-level errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Framing failed: {0}")]
    Frame(#[from] FrameError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Output(err.to_string())
    }
}
