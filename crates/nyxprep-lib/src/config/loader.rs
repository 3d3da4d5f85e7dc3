use super::Config;
use crate::error::NyxPrepError;
use config::Config as ConfigBuilder;

pub fn load_config(config_path: &str) -> Result<Config, NyxPrepError> {
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

/// Loads `config_path` when given, otherwise falls back to the built-in defaults.
pub fn load_config_or_default(config_path: Option<&str>) -> Result<Config, NyxPrepError> {
    match config_path {
        Some(config_path) => {
            tracing::info!("Loading configuration from {}", config_path);
            load_config(config_path)
        }
        None => {
            tracing::debug!("No configuration file given, using built-in defaults");
            Ok(Config::default())
        }
    }
}
