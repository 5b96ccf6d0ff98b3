//! Environment variable source: `GERMINATOR_` prefix, `__` between nested keys

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, Map};

pub const ENV_PREFIX: &str = "GERMINATOR";

/// `GERMINATOR_DEFAULT_PLATFORM` maps to `default_platform`,
/// `GERMINATOR_LOGGING__LEVEL` to `logging.level`. `vars` replaces the
/// process environment when given.
pub fn source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source(None))
}
