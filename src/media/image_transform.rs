// SPDX-License-Identifier: MPL-2.0
//! Resize and adaptive foreground compositing.

use crate::domain::AdaptiveGeometry;
use crate::media::Raster;
use image_rs::{imageops, imageops::FilterType, Rgba, RgbaImage};

/// Resampling filter used for every generated asset.
pub const ICON_FILTER: FilterType = FilterType::Lanczos3;

/// Resize the raster to `size × size` using a high-quality filter.
///
/// The channel layout is preserved, alpha included. A zero size is raised to 1.
#[must_use]
pub fn resize(image: &Raster, size: u32) -> Raster {
    let size = size.max(1);
    Raster::new(image.as_dynamic().resize_exact(size, size, ICON_FILTER))
}

/// Build the adaptive icon foreground for `base_size`.
///
/// The source is resized to the foreground size and placed at the centering
/// offset of a fully transparent square canvas. With an alpha channel the
/// foreground's own alpha is the paste mask (see [`paste_with_alpha_mask`]),
/// so transparent source pixels leave the canvas transparent. Without one the
/// region is overwritten opaquely.
#[must_use]
pub fn composite_adaptive_foreground(image: &Raster, base_size: u32) -> Raster {
    let geometry = AdaptiveGeometry::for_base_size(base_size);
    let foreground = resize(image, geometry.foreground_size);
    let offset = i64::from(geometry.offset());

    log::debug!(
        "Adaptive foreground for base {base_size}: fg {} on canvas {} at offset {offset}",
        geometry.foreground_size,
        geometry.canvas_size
    );

    let mut canvas = RgbaImage::from_pixel(
        geometry.canvas_size,
        geometry.canvas_size,
        Rgba([0, 0, 0, 0]),
    );
    let layer = foreground.to_rgba8();

    if foreground.has_alpha() {
        paste_with_alpha_mask(&mut canvas, &layer, geometry.offset());
    } else {
        imageops::replace(&mut canvas, &layer, offset, offset);
    }

    Raster::from(canvas)
}

/// Paste `layer` at `(offset, offset)` using its alpha channel as the mask.
///
/// Every channel, alpha included, is interpolated between canvas and layer
/// by `mask / 255`: `out = canvas + (layer - canvas) * mask / 255`, rounded.
/// On a transparent canvas this yields `layer * a / 255`, so partially
/// transparent alpha ends up as `a² / 255`. Pixels outside the canvas are
/// skipped.
pub fn paste_with_alpha_mask(canvas: &mut RgbaImage, layer: &RgbaImage, offset: u32) {
    for (x, y, pixel) in layer.enumerate_pixels() {
        let (cx, cy) = (x + offset, y + offset);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let mask = i32::from(pixel.0[3]);
        let target = canvas.get_pixel_mut(cx, cy);
        for (out, &value) in target.0.iter_mut().zip(pixel.0.iter()) {
            *out = blend_channel(i32::from(value), i32::from(*out), mask);
        }
    }
}

/// `background + (foreground - background) * mask / 255` with exact rounding.
fn blend_channel(foreground: i32, background: i32, mask: i32) -> u8 {
    let tmp = (foreground - background) * mask + 128;
    let blended = background + (((tmp >> 8) + tmp) >> 8);
    u8::try_from(blended.clamp(0, 255)).unwrap_or(u8::MAX)
}
