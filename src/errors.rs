// src/errors.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("No configuration directory available")]
    NoConfigDir,

    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode settings: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value stored under '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
