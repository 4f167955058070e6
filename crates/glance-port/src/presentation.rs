// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Presentation manager port: draws and erases highlights.

use core::ops::{Deref, DerefMut};

use crate::style::HighlightStyle;
use crate::types::{DisplayMode, ObjectId, OwnerId, ViewerId};

/// Presentation manager port trait.
///
/// Implementors draw what they are told and keep no selection state.
///
/// # Immediate mode
///
/// Hover feedback is drawn in immediate mode: outside the persistent scene
/// graph, between [`begin_immediate_draw`](Self::begin_immediate_draw) and
/// [`end_immediate_draw`](Self::end_immediate_draw), and discarded by
/// [`clear_immediate_draw`](Self::clear_immediate_draw). Prefer
/// [`ImmediateDraw::begin`] over calling the bracket by hand.
pub trait PresentationManager {
    /// Highlight a whole object with `style` in presentation `mode`.
    fn color(&mut self, object: ObjectId, style: &HighlightStyle, mode: DisplayMode);

    /// Remove every highlight of a whole object.
    fn unhighlight(&mut self, object: ObjectId);

    /// Highlight a single owner with `style` in presentation `mode`.
    fn highlight_owner(&mut self, owner: OwnerId, style: &HighlightStyle, mode: DisplayMode);

    /// Remove the highlight of a single owner.
    fn unhighlight_owner(&mut self, owner: OwnerId);

    /// Show an object in presentation `mode`.
    fn display(&mut self, object: ObjectId, mode: DisplayMode);

    /// Hide an object.
    fn erase(&mut self, object: ObjectId);

    /// Open an immediate-mode drawing bracket.
    fn begin_immediate_draw(&mut self);

    /// Close the immediate-mode bracket and present it on `viewer`.
    fn end_immediate_draw(&mut self, viewer: ViewerId);

    /// Discard everything drawn in immediate mode.
    fn clear_immediate_draw(&mut self);

    /// Redraw the immediate layer of `viewer` synchronously.
    fn redraw_immediate(&mut self, viewer: ViewerId);
}

/// Scoped immediate-mode bracket.
///
/// Created by [`ImmediateDraw::begin`]; closes the bracket with
/// [`PresentationManager::end_immediate_draw`] when dropped, so an early
/// return inside the bracket cannot leave it open.
pub struct ImmediateDraw<'a, P: PresentationManager + ?Sized> {
    pm: &'a mut P,
    viewer: ViewerId,
}

impl<'a, P: PresentationManager + ?Sized> ImmediateDraw<'a, P> {
    /// Open the bracket on `pm`; it will be presented on `viewer`.
    pub fn begin(pm: &'a mut P, viewer: ViewerId) -> Self {
        pm.begin_immediate_draw();
        Self { pm, viewer }
    }
}

impl<P: PresentationManager + ?Sized> Deref for ImmediateDraw<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pm
    }
}

impl<P: PresentationManager + ?Sized> DerefMut for ImmediateDraw<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pm
    }
}

impl<P: PresentationManager + ?Sized> Drop for ImmediateDraw<'_, P> {
    fn drop(&mut self) {
        self.pm.end_immediate_draw(self.viewer);
    }
}
