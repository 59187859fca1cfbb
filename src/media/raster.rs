// SPDX-License-Identifier: MPL-2.0
//! Decoded raster with explicit channel capabilities.

use image_rs::{DynamicImage, GenericImageView, RgbaImage};

/// An in-memory raster.
///
/// Wraps a [`DynamicImage`] so callers branch on [`Raster::has_alpha`]
/// instead of matching on the pixel layout themselves. The channel layout of
/// the decoded file is kept as-is; conversions happen only where an encoder
/// or the compositor needs RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: DynamicImage,
}

impl Raster {
    #[must_use]
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether the pixel layout carries an alpha channel.
    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Raw interleaved samples in the native layout (row-major).
    #[must_use]
    pub fn channel_data(&self) -> &[u8] {
        self.image.as_bytes()
    }

    #[must_use]
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// 8-bit RGBA copy; opaque layouts get alpha 255.
    #[must_use]
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }
}

impl From<DynamicImage> for Raster {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

impl From<RgbaImage> for Raster {
    fn from(image: RgbaImage) -> Self {
        Self::new(DynamicImage::ImageRgba8(image))
    }
}
