use std::path::PathBuf;

use scope_recolor::{ColorizeError, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Settings file {path}: {message}")]
    SettingsFile { path: String, message: String },

    #[error("Unknown style '{name}' (available: {available})")]
    UnknownStyle { name: String, available: String },

    #[error("Cannot decode image {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Colorize(#[from] ColorizeError),
}
