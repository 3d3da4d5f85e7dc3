use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/{organization}/{repository}/{version}/{filename}";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub logger: LoggerConfig,
    pub output: OutputConfig,
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpstreamConfig {
    /// Raw-file URL with `{organization}`, `{repository}`, `{version}` and `{filename}` placeholders
    pub url_template: String,
    pub organization: String,
    pub repository: String,
    /// Release tag the files are fetched from
    pub version: String,
    /// Files fetched, in order
    pub files: Vec<FileDef>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            organization: "cesanta".to_string(),
            repository: "mongoose".to_string(),
            version: "7.19".to_string(),
            files: vec![
                FileDef::Simple("mongoose.c".to_string()),
                FileDef::Simple("mongoose.h".to_string()),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, untagged)]
pub enum FileDef {
    Simple(String),
    Pinned { name: String, digest: DigestDef },
}

impl FileDef {
    pub fn name(&self) -> &str {
        match self {
            FileDef::Simple(name) => name,
            FileDef::Pinned { name, .. } => name,
        }
    }

    pub fn digest(&self) -> Option<&DigestDef> {
        match self {
            FileDef::Simple(_) => None,
            FileDef::Pinned { digest, .. } => Some(digest),
        }
    }
}

/// Expected digest of the raw upstream file, before patching
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DigestDef {
    pub algorithm: DigestAlgorithm,
    pub value: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Sha256,
    Sha512,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggerConfig {
    /// Preprocessor symbol guarding the upstream logging block
    pub guard: String,
    /// Global that receives the log level before each call
    pub level_symbol: String,
    /// printf-style function the `MG_LOG` macro forwards to
    pub log_function: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            guard: "MG_ENABLE_LOG".to_string(),
            level_symbol: "mg_to_indi_log_level".to_string(),
            log_function: "mg_to_indi_log_int".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Fail instead of passing the file through when the logging block is missing
    pub require_patch: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("src/external"),
            require_patch: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("nyxprep/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
