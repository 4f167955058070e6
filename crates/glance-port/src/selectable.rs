// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selectable object contract.

use crate::owner::EntityOwner;
use crate::presentation::PresentationManager;
use crate::style::HighlightStyle;
use crate::types::{DisplayMode, ObjectId, SelectionMode};

/// An object the selection context can detect, select and highlight.
///
/// The object owns its [`EntityOwner`]s; owner `i` is addressed as
/// `OwnerId { object, index: i }`. The context never downcasts: everything it
/// needs from an object goes through this trait.
pub trait Selectable {
    /// Every owner of this object, in index order.
    fn owners(&self) -> &[EntityOwner];

    /// Mutable access to the owners.
    fn owners_mut(&mut self) -> &mut [EntityOwner];

    /// Index of the owner representing the whole object, if any.
    fn global_owner(&self) -> Option<u32>;

    /// Selection mode in which the whole object is selectable.
    fn global_selection_mode(&self) -> SelectionMode {
        SelectionMode(0)
    }

    /// Preferred presentation mode, if the object has one.
    fn display_mode(&self) -> Option<DisplayMode> {
        None
    }

    /// Presentation mode to highlight in, if the object has one.
    fn hilight_mode(&self) -> Option<DisplayMode> {
        None
    }

    /// Whether the object can be presented in `mode`.
    fn accepts_display_mode(&self, _mode: DisplayMode) -> bool {
        true
    }

    /// Object-specific style overriding the context's hover and selection styles.
    fn custom_hilight_style(&self) -> Option<HighlightStyle> {
        None
    }

    /// Render one combined highlight for the selected, non-auto-highlight
    /// owners listed in `owners`.
    ///
    /// Called once per object per batch, however many owners are selected.
    fn hilight_selected(
        &mut self,
        object: ObjectId,
        pm: &mut dyn PresentationManager,
        style: &HighlightStyle,
        owners: &[u32],
    ) {
        let _ = owners;
        pm.color(object, style, self.hilight_mode().unwrap_or_default());
    }

    /// Forget the combined selection highlight drawn by [`hilight_selected`](Self::hilight_selected).
    fn clear_selected(&mut self) {}

    /// Owner at `index`.
    fn owner(&self, index: u32) -> Option<&EntityOwner> {
        self.owners().get(index as usize)
    }

    /// Mutable owner at `index`.
    fn owner_mut(&mut self, index: u32) -> Option<&mut EntityOwner> {
        self.owners_mut().get_mut(index as usize)
    }
}
