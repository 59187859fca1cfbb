// SPDX-License-Identifier: MPL-2.0
//! The icon generation pipeline.
//!
//! One linear pass: validate the configuration, decode the source once, then
//! for each density write the legacy icon, the round icon and the adaptive
//! foreground, in that order. The first error aborts the run; files already
//! written stay in place and a re-run overwrites them identically.

use crate::config::Config;
use crate::domain::{AssetKind, DensitySpec};
use crate::error::Result;
use crate::media::{self, Raster};
use std::path::{Path, PathBuf};

/// One asset written by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    /// Density label (without the `mipmap-` prefix).
    pub density: String,
    pub kind: AssetKind,
    pub path: PathBuf,
    /// Side length of the square asset, in pixels.
    pub size: u32,
}

/// Every asset of a successful run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub assets: Vec<GeneratedAsset>,
}

impl GenerationReport {
    /// Assets written for one density, in write order.
    pub fn for_density<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a GeneratedAsset> {
        self.assets.iter().filter(move |asset| asset.density == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Progress notifications emitted while the pipeline runs.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// The source image was decoded.
    SourceLoaded {
        path: &'a Path,
        width: u32,
        height: u32,
    },
    /// An asset file was written.
    AssetWritten(&'a GeneratedAsset),
}

/// Generates launcher icon sets from one source image.
#[derive(Debug, Clone)]
pub struct IconPipeline {
    config: Config,
}

impl IconPipeline {
    /// Creates a pipeline for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the pipeline without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`IconPipeline::run_with_progress`].
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_with_progress(|_| {})
    }

    /// Runs the pipeline, calling `on_progress` after the source is decoded
    /// and after each file is written.
    ///
    /// Nothing is created on disk before the source decodes successfully.
    ///
    /// # Errors
    ///
    /// Returns the first decode, I/O or encode error encountered.
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> Result<GenerationReport>
    where
        F: FnMut(Progress<'_>),
    {
        let source = media::load_source(&self.config.source_path)?;
        let (width, height) = source.dimensions();
        log::debug!(
            "Loaded source image {} ({width}x{height})",
            self.config.source_path.display()
        );
        if width != height {
            log::warn!("Source image is not square ({width}x{height}); icons will be stretched");
        }
        on_progress(Progress::SourceLoaded {
            path: &self.config.source_path,
            width,
            height,
        });

        let mut report = GenerationReport::default();
        for density in &self.config.densities {
            self.generate_density(&source, density, &mut report, &mut on_progress)?;
        }

        log::info!("Generated {} assets", report.len());
        Ok(report)
    }

    /// Path of one asset under the output root.
    #[must_use]
    pub fn asset_path(&self, density: &DensitySpec, kind: AssetKind) -> PathBuf {
        self.config
            .output_root
            .join(density.folder_name())
            .join(kind.file_name(self.config.format.extension()))
    }

    fn generate_density<F>(
        &self,
        source: &Raster,
        density: &DensitySpec,
        report: &mut GenerationReport,
        on_progress: &mut F,
    ) -> Result<()>
    where
        F: FnMut(Progress<'_>),
    {
        let Config {
            output_root,
            quality,
            format,
            ..
        } = &self.config;

        log::info!(
            "Generating {} (base {}px)",
            density.folder_name(),
            density.base_size
        );
        media::ensure_output_dir(&output_root.join(density.folder_name()))?;

        // Icon and round icon share one encoding so they are byte-identical.
        let icon = media::resize(source, density.base_size);
        let icon_bytes = media::encode(&icon, *format, *quality)?;
        for kind in [AssetKind::Icon, AssetKind::RoundIcon] {
            let path = self.asset_path(density, kind);
            media::write_atomic(&path, &icon_bytes)?;
            record(report, on_progress, density, kind, path, density.base_size);
        }

        let foreground = media::composite_adaptive_foreground(source, density.base_size);
        let path = self.asset_path(density, AssetKind::Foreground);
        media::encode_and_save(&foreground, &path, *format, *quality)?;
        record(
            report,
            on_progress,
            density,
            AssetKind::Foreground,
            path,
            foreground.width(),
        );

        Ok(())
    }
}

fn record<F>(
    report: &mut GenerationReport,
    on_progress: &mut F,
    density: &DensitySpec,
    kind: AssetKind,
    path: PathBuf,
    size: u32,
) where
    F: FnMut(Progress<'_>),
{
    log::debug!("Wrote {kind} {} ({size}x{size})", path.display());
    report.assets.push(GeneratedAsset {
        density: density.label.clone(),
        kind,
        path,
        size,
    });
    if let Some(asset) = report.assets.last() {
        on_progress(Progress::AssetWritten(asset));
    }
}
