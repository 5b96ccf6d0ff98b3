//! Configuration
//!
//! Layered configuration built with the `config` crate. Lowest to highest
//! precedence: built-in defaults, the global file
//! `$XDG_CONFIG_HOME/germinator/config.toml`, the workspace file
//! `./germinator.toml`, then `GERMINATOR_*` environment variables with `__`
//! between nested keys (`GERMINATOR_LOGGING__LEVEL=debug`).

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the per-workspace configuration file.
pub const WORKSPACE_CONFIG_FILE: &str = "germinator.toml";

/// Top-level germinator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GerminatorConfig {
    /// Platform used when `--platform` is not given.
    #[serde(default)]
    pub default_platform: Option<String>,

    /// Directory holding `<platform>/<kind>.tmpl` template overrides.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GerminatorConfig {
    /// The platform to use: `explicit` if given, else `default_platform`.
    pub fn resolve_platform(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_platform.clone())
            .filter(|p| !p.is_empty())
    }
}
