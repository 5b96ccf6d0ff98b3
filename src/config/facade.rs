//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::GerminatorConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the standard files under `workspace_root` and the environment.
    pub fn load(workspace_root: &Path) -> Result<GerminatorConfig, ConfigError> {
        MergeService::load(workspace_root)
    }

    /// Load a single file plus the environment overlay. File discovery is
    /// skipped.
    pub fn load_from_file(path: &Path) -> Result<GerminatorConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
