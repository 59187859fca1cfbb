// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Paths**: Source image and resource root of a standard Android module
//! - **Densities**: Base launcher icon size per density bucket
//! - **Adaptive icon**: Foreground scale and canvas ratio
//! - **Encoding**: Output quality bounds

// ==========================================================================
// Path Defaults
// ==========================================================================

/// Default high-resolution source image (the Play Store icon).
pub const DEFAULT_SOURCE_PATH: &str = "app/src/main/ic_launcher-playstore.png";

/// Default Android resource directory receiving the `mipmap-*` folders.
pub const DEFAULT_OUTPUT_ROOT: &str = "app/src/main/res";

// ==========================================================================
// Density Defaults
// ==========================================================================

/// Density label and base launcher icon size, in write order.
pub const DEFAULT_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Largest accepted base size; keeps the canvas well inside `u32`.
pub const MAX_BASE_SIZE: u32 = 8192;

// ==========================================================================
// Adaptive Icon Defaults
// ==========================================================================

/// Legacy launcher icon size in dp.
pub const LEGACY_ICON_DP: u32 = 48;

/// Adaptive icon canvas size in dp.
pub const ADAPTIVE_CANVAS_DP: u32 = 108;

/// Foreground is scaled to 3/2 of the base size (72dp safe zone at mdpi).
pub const FOREGROUND_SCALE_NUMERATOR: u32 = 3;

/// See [`FOREGROUND_SCALE_NUMERATOR`].
pub const FOREGROUND_SCALE_DENOMINATOR: u32 = 2;

// ==========================================================================
// Encoding Defaults
// ==========================================================================

/// Default lossy encoder quality.
pub const DEFAULT_QUALITY: u8 = 95;

/// Maximum encoder quality.
pub const MAX_QUALITY: u8 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_QUALITY <= MAX_QUALITY);
    assert!(FOREGROUND_SCALE_DENOMINATOR > 0);
    assert!(LEGACY_ICON_DP > 0);

    // The scaled foreground must fit inside the canvas.
    assert!(
        FOREGROUND_SCALE_NUMERATOR * LEGACY_ICON_DP
            < ADAPTIVE_CANVAS_DP * FOREGROUND_SCALE_DENOMINATOR
    );

    let mut i = 0;
    while i < DEFAULT_DENSITIES.len() {
        assert!(DEFAULT_DENSITIES[i].1 > 0);
        assert!(DEFAULT_DENSITIES[i].1 <= MAX_BASE_SIZE);
        i += 1;
    }
};
