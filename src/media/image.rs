// SPDX-License-Identifier: MPL-2.0
//! Source image loading.

use crate::error::{Error, Result};
use crate::media::Raster;
use std::fs;
use std::path::Path;

/// Load and decode the source image.
///
/// The container format is detected from the file contents, not the
/// extension. The decoded channel layout (including alpha) is kept.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file does not exist, cannot be read,
/// or is not a raster the `image` crate can decode.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();

    let bytes =
        fs::read(path).map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

    let image = image_rs::load_from_memory(&bytes)
        .map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

    log::debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        image.color(),
        image.width(),
        image.height()
    );

    Ok(Raster::new(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_source_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("source.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 128]));
        image.save(&image_path).expect("failed to write png");

        let raster = load_source(&image_path).expect("failed to load png");
        assert_eq!(raster.dimensions(), (4, 2));
        assert!(raster.has_alpha());
        assert_eq!(raster.to_rgba8().get_pixel(0, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn load_missing_source_is_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_source(temp_dir.path().join("missing.png")).unwrap_err();
        match err {
            Error::Decode(message) => assert!(message.contains("missing.png")),
            other => panic!("expected Decode variant, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_is_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("broken.png");
        fs::write(&image_path, b"not an image").expect("failed to write file");

        let err = load_source(&image_path).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn extension_does_not_drive_format_detection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("actually_png.jpg");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))
            .save_with_format(&image_path, image_rs::ImageFormat::Png)
            .expect("failed to write png");

        let raster = load_source(&image_path).expect("content sniffing should win");
        assert_eq!(raster.dimensions(), (3, 3));
    }
}
