// SPDX-License-Identifier: MPL-2.0
//! Raster handling for icon generation.
//!
//! This module provides loading of the source image, Lanczos resizing,
//! adaptive foreground compositing, and encoding of the finished assets.

pub mod export;
pub mod image;
pub mod image_transform;
pub mod raster;

// Re-export commonly used types
pub use export::{encode, encode_and_save, ensure_output_dir, write_atomic, OutputFormat};
pub use image::load_source;
pub use image_transform::{composite_adaptive_foreground, resize};
pub use raster::Raster;
