//! ConfigLoader: single entry point that assembles every source in order.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::TravelConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`TravelConfig`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, workspace files, then environment.
    pub fn load(workspace_root: &Path) -> Result<TravelConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: TravelConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Self::validated(config)
    }

    /// Defaults, the given file (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<TravelConfig, ApiError> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: TravelConfig = builder.build()?.try_deserialize()?;
        debug!(path = %path.display(), "Loaded configuration file");
        Self::validated(config)
    }

    fn validated(config: TravelConfig) -> Result<TravelConfig, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
