use thiserror::Error;

use crate::domain::PermissionState;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geocoding failed ({status}): {message}")]
    Geocoding { status: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Location unavailable: {0}")]
    Location(String),

    #[error("Location permission not granted ({0:?})")]
    PermissionDenied(PermissionState),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
