//! Slider configuration errors
//!
//! Interaction never fails; these only cover loading and saving configs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for a slider
    #[error("failed to parse slider config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written back out
    #[error("failed to serialize slider config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;
