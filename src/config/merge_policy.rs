//! Merge rules: defaults, override order, conflict handling.

use super::DEFAULT_FALLBACK;
use crate::geo::ViewportPolicy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let viewport = ViewportPolicy::default();
    Config::builder()
        .set_default("map.fallback.latitude", DEFAULT_FALLBACK.latitude)?
        .set_default("map.fallback.longitude", DEFAULT_FALLBACK.longitude)?
        .set_default("map.min_span_meters", viewport.min_span_meters)?
        .set_default("map.padding", viewport.padding)?
        .set_default("map.focus_span_meters", viewport.focus_span_meters)?
        .set_default("query.folding", "normalized")
}
