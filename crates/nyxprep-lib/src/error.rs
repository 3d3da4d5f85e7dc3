use crate::verification::VerificationError;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NyxPrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Cannot download `{filename}` from {url}: HTTP {status}")]
    Retrieval {
        filename: String,
        url: String,
        status: StatusCode,
    },

    #[error("Downloaded `{filename}` is not valid UTF-8: {source}")]
    Decode {
        filename: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid upstream URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid upstream file entry `{name}`: {reason}")]
    InvalidFileSpec { name: String, reason: String },

    #[error("Output directory creation failed at {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging block guarded by `{guard}` not found in `{filename}`")]
    PatchNotApplied { filename: String, guard: String },

    #[error("Content verification failed for `{filename}`: {source}")]
    Verification {
        filename: String,
        #[source]
        source: VerificationError,
    },

    #[error("Invalid logging guard pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
