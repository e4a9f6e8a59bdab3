//! Error types for rules-deps

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] rules_fs::Error),

    #[error("Failed to read usage rules for {name} at {path}: {source}")]
    RulesRead {
        name: String,
        path: PathBuf,
        #[source]
        source: rules_fs::Error,
    },

    #[error("Failed to run cargo metadata for {manifest}: {message}")]
    CargoMetadata { manifest: PathBuf, message: String },

    #[error("Invalid cargo metadata output: {0}")]
    MetadataParse(#[from] serde_json::Error),

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}
