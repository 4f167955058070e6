// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Behaviour switches of a selection context.

use glance_port::{DisplayMode, PickingStrategy};

/// Behaviour switches of a [`crate::SelectionContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextSettings {
    /// Drive the presentation manager on detection and selection changes.
    ///
    /// When off, the context only maintains logical state and the host draws
    /// feedback itself.
    pub auto_hilight: bool,
    /// Hover-highlight owners that are already selected.
    pub hilight_selected: bool,
    /// How the topmost hover candidate is chosen.
    pub picking_strategy: PickingStrategy,
    /// Activate an object's global selection mode when it is first displayed.
    pub activate_on_display: bool,
    /// Presentation mode for objects without a preferred one.
    pub default_display_mode: DisplayMode,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            auto_hilight: true,
            hilight_selected: false,
            picking_strategy: PickingStrategy::FirstAcceptable,
            activate_on_display: true,
            default_display_mode: DisplayMode(0),
        }
    }
}
