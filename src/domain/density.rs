// SPDX-License-Identifier: MPL-2.0
//! Density buckets and the adaptive icon geometry they imply.

use crate::config::defaults::{
    ADAPTIVE_CANVAS_DP, FOREGROUND_SCALE_DENOMINATOR, FOREGROUND_SCALE_NUMERATOR, LEGACY_ICON_DP,
};
use serde::{Deserialize, Serialize};

/// Prefix of every Android density resource folder.
pub const MIPMAP_FOLDER_PREFIX: &str = "mipmap-";

/// A density bucket and the base launcher icon size it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensitySpec {
    /// Density qualifier without the `mipmap-` prefix (e.g. `xhdpi`).
    pub label: String,
    /// Side length of the legacy square icon, in pixels.
    pub base_size: u32,
}

impl DensitySpec {
    pub fn new(label: impl Into<String>, base_size: u32) -> Self {
        Self {
            label: label.into(),
            base_size,
        }
    }

    /// Resource folder name for this density (`mipmap-<label>`).
    #[must_use]
    pub fn folder_name(&self) -> String {
        format!("{MIPMAP_FOLDER_PREFIX}{}", self.label)
    }
}

/// Pixel geometry of an adaptive icon foreground for one base size.
///
/// The foreground is the source scaled by 3/2 of the base size and the
/// canvas is 108/48 of the base size, both floored. The foreground is
/// always strictly smaller than the canvas, so the offset is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveGeometry {
    /// Side length of the scaled foreground.
    pub foreground_size: u32,
    /// Side length of the transparent square canvas.
    pub canvas_size: u32,
}

impl AdaptiveGeometry {
    #[must_use]
    pub fn for_base_size(base_size: u32) -> Self {
        Self {
            foreground_size: scale_floor(
                base_size,
                FOREGROUND_SCALE_NUMERATOR,
                FOREGROUND_SCALE_DENOMINATOR,
            ),
            canvas_size: scale_floor(base_size, ADAPTIVE_CANVAS_DP, LEGACY_ICON_DP),
        }
    }

    /// Top-left position of the foreground on the canvas, on both axes.
    #[must_use]
    pub fn offset(self) -> u32 {
        self.canvas_size.saturating_sub(self.foreground_size) / 2
    }

    /// Transparent border width on the right and bottom edges.
    ///
    /// Equal to [`offset`](Self::offset) when the free space is even and one
    /// pixel wider when it is odd.
    #[must_use]
    pub fn trailing_margin(self) -> u32 {
        self.canvas_size
            .saturating_sub(self.foreground_size)
            .saturating_sub(self.offset())
    }
}

/// `floor(value * numerator / denominator)` without intermediate overflow.
fn scale_floor(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
