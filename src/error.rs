// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every failure in the pipeline is fatal, so the variants only classify
//! where the run stopped: reading the source, touching the filesystem,
//! encoding an asset, or validating configuration.

use image_rs::ImageError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Source image missing, unreadable, or not a valid raster.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// Directory creation or file write failure.
    #[error("I/O Error: {0}")]
    Io(String),

    /// Raster could not be represented in the target format.
    #[error("Encode Error: {0}")]
    Encode(String),

    /// Invalid configuration value or unparseable config file.
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(e) => Error::Io(e.to_string()),
            ImageError::Encoding(_) | ImageError::Parameter(_) => Error::Encode(err.to_string()),
            _ => Error::Decode(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
