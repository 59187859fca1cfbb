// SPDX-License-Identifier: MPL-2.0
//! `mipmap_forge` generates Android launcher icon sets from a single
//! high-resolution source image.
//!
//! For every density bucket it writes a Lanczos-resized square icon, an
//! identical round icon, and an adaptive icon foreground centered on a
//! transparent 108/48-scaled canvas.
//!
//! ```no_run
//! use mipmap_forge::{Config, IconPipeline};
//!
//! let report = IconPipeline::new(Config::default())?.run()?;
//! assert_eq!(report.len(), 15);
//! # Ok::<(), mipmap_forge::error::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{GeneratedAsset, GenerationReport, IconPipeline, Progress};
