use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-fingerprint library
#[derive(Error, Debug)]
pub enum Error {
    /// The image codec could not decode the supplied bytes
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
