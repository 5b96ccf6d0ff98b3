//! Global file source: `$XDG_CONFIG_HOME/germinator/config.toml`.

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::{Path, PathBuf};

/// Location of the global file, if a config home can be determined.
pub fn path() -> Option<PathBuf> {
    xdg::germinator_config_dir().ok().map(|dir| dir.join("config.toml"))
}

/// Optional: a missing global file is not an error.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(false))
}
