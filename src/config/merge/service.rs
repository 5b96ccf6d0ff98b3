//! MergeService: stacks sources in precedence order and deserializes the result.

use super::merge_policy;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::GerminatorConfig;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use tracing::debug;

pub struct MergeService;

impl MergeService {
    /// Defaults, global file, workspace file, environment.
    pub fn load(workspace_root: &Path) -> Result<GerminatorConfig, ConfigError> {
        let global = global_file::path();
        Self::load_layers(global.as_deref(), workspace_root)
    }

    /// Same as [`MergeService::load`] with an explicit global file location.
    pub fn load_layers(
        global: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<GerminatorConfig, ConfigError> {
        let builder = Self::file_layers(global, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        debug!(workspace = %workspace_root.display(), "loading configuration");
        builder.build()?.try_deserialize()
    }

    /// The file layers of [`MergeService::load_layers`] with `env` as the
    /// environment layer.
    pub fn load_layers_with_env(
        global: Option<&Path>,
        workspace_root: &Path,
        env: Environment,
    ) -> Result<GerminatorConfig, ConfigError> {
        let builder = Self::file_layers(global, workspace_root)?.add_source(env);
        builder.build()?.try_deserialize()
    }

    fn file_layers(
        global: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = match global {
            Some(path) => global_file::add_to_builder(builder, path),
            None => builder,
        };
        Ok(workspace_file::add_to_builder(builder, workspace_root))
    }

    /// Defaults, the given file (which must exist), environment.
    pub fn load_from_file(path: &Path) -> Result<GerminatorConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        debug!(path = %path.display(), "loading configuration file");
        builder.build()?.try_deserialize()
    }
}
