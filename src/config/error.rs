//! Error handling for the config module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to place the config file in.
    #[error("Home directory not found")]
    HomeNotFound,

    /// Reading, writing, or removing the config file failed.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`super::Config`].
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
