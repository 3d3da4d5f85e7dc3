pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod patch;
pub mod upstream;
pub mod verification;

pub use config::Config;
pub use error::NyxPrepError;
