// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Highlight style table and style/mode resolution.

use glance_port::{DisplayMode, HighlightKind, HighlightStyle, Selectable};

/// One style per [`HighlightKind`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTable {
    styles: [HighlightStyle; 5],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            styles: HighlightKind::ALL.map(HighlightStyle::default_for),
        }
    }
}

impl StyleTable {
    /// Table of built-in styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for `kind`.
    pub fn get(&self, kind: HighlightKind) -> &HighlightStyle {
        &self.styles[kind.index()]
    }

    /// Replace the style for `kind`.
    pub fn set(&mut self, kind: HighlightKind, style: HighlightStyle) {
        self.styles[kind.index()] = style;
    }

    /// Hover style for an owner: the object's custom style, else the dynamic
    /// style matching the owner's granularity.
    pub fn hover_style(&self, custom: Option<HighlightStyle>, is_global: bool) -> HighlightStyle {
        custom.unwrap_or_else(|| {
            *self.get(if is_global {
                HighlightKind::Dynamic
            } else {
                HighlightKind::LocalDynamic
            })
        })
    }

    /// Selection style for an owner: the object's custom style, else the
    /// selected style matching the owner's granularity.
    pub fn selection_style(
        &self,
        custom: Option<HighlightStyle>,
        is_global: bool,
    ) -> HighlightStyle {
        custom.unwrap_or_else(|| {
            *self.get(if is_global {
                HighlightKind::Selected
            } else {
                HighlightKind::LocalSelected
            })
        })
    }

    /// Sub-intensity style, its transparency synced from the selected style.
    ///
    /// The two styles differ only by color, so the sync happens at every use
    /// rather than when the selected style is edited.
    pub fn sub_intensity_style(&mut self) -> HighlightStyle {
        let transparency = self.get(HighlightKind::Selected).transparency;
        self.styles[HighlightKind::SubIntensity.index()].transparency = transparency;
        *self.get(HighlightKind::SubIntensity)
    }
}

/// Presentation mode to highlight `object` in with `style`.
///
/// First match wins: the style's own mode if the object accepts it, the
/// object's highlight mode, `display_mode`, the object's display mode, mode 0.
pub fn hilight_mode(
    object: &dyn Selectable,
    style: &HighlightStyle,
    display_mode: Option<DisplayMode>,
) -> DisplayMode {
    style
        .display_mode
        .filter(|mode| object.accepts_display_mode(*mode))
        .or_else(|| object.hilight_mode())
        .or(display_mode)
        .or_else(|| object.display_mode())
        .unwrap_or_default()
}
