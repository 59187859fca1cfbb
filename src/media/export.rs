// SPDX-License-Identifier: MPL-2.0
//! Asset encoding and writing.
//!
//! WebP assets are encoded lossy through libwebp (`webp-animation`), since
//! the `image` crate only writes lossless WebP. PNG goes through the `image`
//! crate. Files are written to a sibling `.part` file and renamed into place
//! so an interrupted run never leaves a truncated asset under its final name.

use crate::error::{Error, Result};
use crate::media::Raster;
use image_rs::ImageFormat;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use webp_animation::{Encoder, EncoderOptions, EncodingConfig, EncodingType, LossyEncodingConfig};

/// libwebp effort level (0 = fast, 6 = slowest/best).
const WEBP_METHOD: usize = 4;

/// End timestamp of the single encoded frame.
const WEBP_FRAME_DURATION_MS: i32 = 100;

/// Suffix of the temporary file an asset is written to before the rename.
const PARTIAL_SUFFIX: &str = ".part";

/// Supported output formats for generated assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy WebP at the configured quality (Android's preferred format).
    #[default]
    WebP,
    /// Lossless PNG; quality is ignored.
    Png,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Png => "png",
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<OutputFormat> {
        match ext.to_lowercase().as_str() {
            "webp" => Some(OutputFormat::WebP),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| {
            Error::Config(format!("unknown output format '{s}' (expected webp or png)"))
        })
    }
}

/// Encode the raster in memory.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the encoder rejects the raster.
pub fn encode(raster: &Raster, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
    match format {
        OutputFormat::WebP => encode_webp(raster, quality),
        OutputFormat::Png => encode_png(raster),
    }
}

fn encode_webp(raster: &Raster, quality: u8) -> Result<Vec<u8>> {
    let rgba = raster.to_rgba8();
    let options = EncoderOptions {
        encoding_config: Some(EncodingConfig {
            encoding_type: EncodingType::Lossy(LossyEncodingConfig::default()),
            quality: f32::from(quality),
            method: WEBP_METHOD,
        }),
        ..EncoderOptions::default()
    };

    let mut encoder = Encoder::new_with_options(rgba.dimensions(), options)
        .map_err(|e| Error::Encode(format!("WebP encoder setup failed: {e:?}")))?;
    encoder
        .add_frame(rgba.as_raw(), 0)
        .map_err(|e| Error::Encode(format!("WebP frame rejected: {e:?}")))?;
    let data = encoder
        .finalize(WEBP_FRAME_DURATION_MS)
        .map_err(|e| Error::Encode(format!("WebP finalize failed: {e:?}")))?;

    Ok(data.to_vec())
}

fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .as_dynamic()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("PNG encoding failed: {e}")))?;
    Ok(bytes)
}

/// Create the directory tree if needed. Succeeds when it already exists.
///
/// # Errors
///
/// Returns [`Error::Io`] on permission or filesystem errors, including when
/// the path exists as a regular file.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}

/// Write `bytes` to `path` through a temporary sibling file and a rename.
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be written or renamed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = partial_path(path);

    if let Err(e) = fs::write(&partial, bytes) {
        let _ = fs::remove_file(&partial);
        return Err(Error::Io(format!("{}: {e}", partial.display())));
    }
    if let Err(e) = fs::rename(&partial, path) {
        let _ = fs::remove_file(&partial);
        return Err(Error::Io(format!("{}: {e}", path.display())));
    }
    Ok(())
}

/// Encode the raster and write it to `path`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if encoding fails and [`Error::Io`] if the
/// write fails.
pub fn encode_and_save(
    raster: &Raster,
    path: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    let bytes = encode(raster, format, quality)?;
    write_atomic(path, &bytes)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}
