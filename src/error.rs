//! Error types for the map preparation tools.

use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum MapError {
    /// File read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed map header or data row
    #[error("Format error: {0}")]
    Format(String),

    /// Image decoding failure
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Crop requested on a map with no occupied cells
    #[error("Map contains no occupied cells")]
    EmptyMap,

    /// Crop parameters collapsed to an invalid region
    #[error("Degenerate crop: {0}")]
    DegenerateCrop(String),
}

impl From<toml::de::Error> for MapError {
    fn from(e: toml::de::Error) -> Self {
        MapError::Config(e.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MapError>;
