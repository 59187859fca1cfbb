// SPDX-License-Identifier: MPL-2.0
//! Domain types for launcher icon generation.
//!
//! Pure value types with no I/O: density buckets, the adaptive icon
//! geometry derived from a base size, and the asset kinds written per density.

pub mod asset;
pub mod density;

pub use asset::AssetKind;
pub use density::{AdaptiveGeometry, DensitySpec};
