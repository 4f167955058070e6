// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Entity owner: the atomic unit of picking and selection.

use crate::presentation::PresentationManager;
use crate::style::HighlightStyle;
use crate::types::{DisplayMode, OwnerId, SelectionMode};

/// A selectable sub-entity of an object.
///
/// Owners are created and stored by their [`crate::Selectable`]; the selection
/// context only refers to them through [`OwnerId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityOwner {
    mode: SelectionMode,
    selected: bool,
    auto_hilight: bool,
    forced_hilight: bool,
}

impl EntityOwner {
    /// New, unselected, auto-highlighted owner activated for `mode`.
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: false,
            auto_hilight: true,
            forced_hilight: false,
        }
    }

    /// Delegate highlighting of this owner to its object (see
    /// [`crate::Selectable::hilight_selected`]).
    pub const fn with_auto_hilight(mut self, auto_hilight: bool) -> Self {
        self.auto_hilight = auto_hilight;
        self
    }

    /// Always re-highlight this owner, even when re-detected.
    pub const fn with_forced_hilight(mut self, forced_hilight: bool) -> Self {
        self.forced_hilight = forced_hilight;
        self
    }

    /// Selection mode this owner was created for.
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether the owner is in the selection.
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark the owner as selected or not. Only the selection context should call this.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Whether the presentation manager draws this owner's highlight itself.
    ///
    /// When `false`, the owning object renders one combined highlight for all
    /// of its selected owners.
    pub const fn is_auto_hilight(&self) -> bool {
        self.auto_hilight
    }

    /// Whether re-detection of this owner must redraw its highlight.
    pub const fn is_forced_hilight(&self) -> bool {
        self.forced_hilight
    }

    /// Draw this owner's highlight.
    pub fn hilight_with_color(
        &self,
        id: OwnerId,
        pm: &mut dyn PresentationManager,
        style: &HighlightStyle,
        mode: DisplayMode,
    ) {
        pm.highlight_owner(id, style, mode);
    }

    /// Erase this owner's highlight.
    pub fn unhilight(&self, id: OwnerId, pm: &mut dyn PresentationManager) {
        pm.unhighlight_owner(id);
    }
}
