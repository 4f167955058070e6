// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Highlight style types for selection and hover feedback.

use crate::types::DisplayMode;

/// RGBA color with 8-bit components.
pub type ColorRgba8 = [u8; 4];

/// Which highlight a style is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HighlightKind {
    /// Hover feedback for a whole object.
    Dynamic = 0,
    /// Hover feedback for a sub-entity (face, edge, vertex...).
    LocalDynamic = 1,
    /// Selection feedback for a whole object.
    Selected = 2,
    /// Selection feedback for a sub-entity.
    LocalSelected = 3,
    /// Dimmed feedback for "previously selected, now secondary".
    SubIntensity = 4,
}

impl HighlightKind {
    /// Every kind, in table order.
    pub const ALL: [Self; 5] = [
        Self::Dynamic,
        Self::LocalDynamic,
        Self::Selected,
        Self::LocalSelected,
        Self::SubIntensity,
    ];

    /// Position of this kind in a style table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Visual parameters of one highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightStyle {
    /// Highlight color.
    pub color: ColorRgba8,
    /// Transparency in `[0, 1]`; 0 is opaque.
    pub transparency: f32,
    /// Presentation mode to highlight in; `None` lets the object decide.
    pub display_mode: Option<DisplayMode>,
}

impl HighlightStyle {
    /// Opaque style of the given color with no display-mode override.
    pub const fn with_color(color: ColorRgba8) -> Self {
        Self {
            color,
            transparency: 0.0,
            display_mode: None,
        }
    }

    /// Built-in style for `kind`.
    pub const fn default_for(kind: HighlightKind) -> Self {
        match kind {
            HighlightKind::Dynamic | HighlightKind::LocalDynamic => {
                Self::with_color([0, 255, 255, 255])
            }
            HighlightKind::Selected | HighlightKind::LocalSelected => {
                Self::with_color([204, 204, 204, 255])
            }
            HighlightKind::SubIntensity => Self::with_color([102, 102, 102, 255]),
        }
    }
}
