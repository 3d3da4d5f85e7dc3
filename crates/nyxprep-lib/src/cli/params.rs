use crate::config::Config;
use crate::fetch::FetchOptions;
use crate::patch::LoggerPatch;
use crate::upstream::FileSpec;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub files: Vec<FileSpec>,
    pub patch: LoggerPatch,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct PatchParams {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub patch: LoggerPatch,
    pub require_patch: bool,
}

#[derive(Debug, Clone)]
pub struct ShowConfigParams {
    pub app_config: Config,
    pub files: Vec<FileSpec>,
}
