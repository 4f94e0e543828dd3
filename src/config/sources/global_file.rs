//! Global config file: `$XDG_CONFIG_HOME/agent-launcher/config.toml` (optional).

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Ok(path) = xdg::global_config_path() else {
        tracing::debug!("No config home; skipping global config file");
        return Ok(builder);
    };
    Ok(builder.add_source(File::from(path).required(false)))
}
