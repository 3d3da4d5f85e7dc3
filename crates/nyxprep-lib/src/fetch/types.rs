use crate::config::Config;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub output_dir: PathBuf,
    pub require_patch: bool,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl From<&Config> for FetchOptions {
    fn from(config: &Config) -> Self {
        Self {
            output_dir: config.output.path.clone(),
            require_patch: config.output.require_patch,
            timeout: config.http.timeout_secs.map(Duration::from_secs),
            user_agent: config.http.user_agent.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchedFile {
    pub name: String,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    /// Whether the logging block was replaced; `false` means the file passed through unchanged
    pub patched: bool,
}
