// SPDX-License-Identifier: MPL-2.0
//! The three launcher assets written for every density.

use std::fmt;

/// Kind of launcher asset, in the order they are written for a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Square legacy icon at the base size.
    Icon,
    /// Same pixels as [`AssetKind::Icon`]; the launcher applies the circular mask.
    RoundIcon,
    /// Adaptive icon foreground layer on its transparent canvas.
    Foreground,
}

impl AssetKind {
    /// All kinds in write order.
    pub const ALL: [AssetKind; 3] = [AssetKind::Icon, AssetKind::RoundIcon, AssetKind::Foreground];

    /// File name without extension.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            AssetKind::Icon => "ic_launcher",
            AssetKind::RoundIcon => "ic_launcher_round",
            AssetKind::Foreground => "ic_launcher_foreground",
        }
    }

    /// File name for the given extension (`ic_launcher.webp`, ...).
    #[must_use]
    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{extension}", self.file_stem())
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Icon => write!(f, "icon"),
            AssetKind::RoundIcon => write!(f, "round icon"),
            AssetKind::Foreground => write!(f, "adaptive foreground"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_match_android_resource_names() {
        assert_eq!(AssetKind::Icon.file_name("webp"), "ic_launcher.webp");
        assert_eq!(AssetKind::RoundIcon.file_name("webp"), "ic_launcher_round.webp");
        assert_eq!(
            AssetKind::Foreground.file_name("png"),
            "ic_launcher_foreground.png"
        );
    }

    #[test]
    fn write_order_is_icon_round_foreground() {
        assert_eq!(
            AssetKind::ALL,
            [AssetKind::Icon, AssetKind::RoundIcon, AssetKind::Foreground]
        );
    }
}
