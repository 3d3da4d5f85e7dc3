mod loader;
mod model;

pub use loader::{load_config, load_config_or_default};
pub use model::{
    Config, DEFAULT_URL_TEMPLATE, DigestAlgorithm, DigestDef, FileDef, HttpConfig, LoggerConfig,
    OutputConfig, UpstreamConfig,
};
