// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Object registry, display state and selection modes.

use std::collections::BTreeSet;

use glance_port::{
    DisplayMode, ObjectId, OwnerId, PickingEngine, PresentationManager, Selectable,
    SelectionMode, ViewerPort,
};
use tracing::debug;

use super::SelectionContext;
use crate::error::SelectionError;
use crate::selection::SelectStatus;
use crate::status::{GlobalStatus, GraphicStatus};

impl<P, K, V> SelectionContext<P, K, V>
where
    P: PresentationManager,
    K: PickingEngine,
    V: ViewerPort,
{
    /// Register `object` without displaying it.
    ///
    /// Handles are never reused within one context.
    pub fn add_object(&mut self, object: Box<dyn Selectable>) -> ObjectId {
        let id = ObjectId(self.next_object);
        self.next_object = self.next_object.saturating_add(1);
        self.objects.insert(id, object);
        id
    }

    /// Register and display `object` in one step.
    pub fn display_new(&mut self, object: Box<dyn Selectable>, update: bool) -> ObjectId {
        let id = self.add_object(object);
        self.show(id);
        self.update_viewer(update);
        id
    }

    /// Show `object`, starting to track it on first display.
    ///
    /// First display picks the object's preferred presentation mode and, when
    /// configured, activates its global selection mode.
    pub fn display(&mut self, object: ObjectId, update: bool) -> Result<(), SelectionError> {
        if !self.objects.contains_key(&object) {
            return Err(SelectionError::UnknownObject(object));
        }
        self.show(object);
        self.update_viewer(update);
        Ok(())
    }

    /// Hide `object`, keeping it tracked. Its owners leave the selection and
    /// the detection.
    pub fn erase(&mut self, object: ObjectId, update: bool) {
        let displayed = self
            .statuses
            .get(object)
            .is_some_and(|s| s.graphic_status() == GraphicStatus::Displayed);
        if !displayed {
            return;
        }
        self.forget_object(object);
        if let Some(status) = self.statuses.get_mut(object) {
            status.set_graphic_status(GraphicStatus::Erased);
            status.set_sub_intensity(false);
        }
        self.pm.erase(object);
        debug!(?object, "erased");
        self.update_viewer(update);
    }

    /// Show `object` in another presentation mode.
    ///
    /// The mode is recorded even while the object is erased and applies when
    /// it is shown again. A whole-object highlight is redrawn in the new
    /// mode; sub-entity highlights keep theirs until next drawn.
    pub fn set_display_mode(&mut self, object: ObjectId, mode: DisplayMode, update: bool) {
        let Some(status) = self.statuses.get_mut(object) else {
            return;
        };
        if status.display_mode() == mode {
            return;
        }
        status.set_display_mode(mode);
        if status.graphic_status() != GraphicStatus::Displayed {
            return;
        }
        let restyle = status
            .hilight_style()
            .copied()
            .filter(|_| status.is_hilighted());
        self.pm.display(object, mode);
        if let Some(style) = restyle {
            self.unhighlight_global(object);
            self.highlight_global(object, &style, Some(mode));
        }
        debug!(?object, ?mode, "display mode changed");
        self.update_viewer(update);
    }

    /// Stop tracking `object` and hand it back.
    pub fn remove(&mut self, object: ObjectId, update: bool) -> Option<Box<dyn Selectable>> {
        if let Some(status) = self.statuses.get(object) {
            let displayed = status.graphic_status() == GraphicStatus::Displayed;
            self.forget_object(object);
            if displayed {
                self.pm.erase(object);
            }
            self.statuses.remove(object);
        }
        let removed = self.objects.remove(&object);
        if removed.is_some() {
            debug!(?object, "removed");
            self.update_viewer(update);
        }
        removed
    }

    /// Registered object.
    pub fn object(&self, object: ObjectId) -> Option<&dyn Selectable> {
        self.objects.get(&object).map(Box::as_ref)
    }

    /// Registered object, mutably.
    ///
    /// Owner flags must not be changed through this handle; use the
    /// selection operations instead.
    pub fn object_mut(&mut self, object: ObjectId) -> Option<&mut (dyn Selectable + 'static)> {
        self.objects.get_mut(&object).map(Box::as_mut)
    }

    /// Whether `object` is currently shown.
    pub fn is_displayed(&self, object: ObjectId) -> bool {
        self.statuses
            .get(object)
            .is_some_and(|s| s.graphic_status() == GraphicStatus::Displayed)
    }

    /// Bookkeeping of a tracked object.
    pub fn status(&self, object: ObjectId) -> Option<&GlobalStatus> {
        self.statuses.get(object)
    }

    /// Registered objects in handle order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    /// Activate selection `mode` on `object`.
    ///
    /// A registered but untracked object becomes tracked in the erased state.
    pub fn activate(&mut self, object: ObjectId, mode: SelectionMode) -> Result<(), SelectionError> {
        if !self.objects.contains_key(&object) {
            return Err(SelectionError::UnknownObject(object));
        }
        if !self.statuses.contains(object) {
            let display_mode = self.preferred_display_mode(object);
            self.statuses
                .insert(object, GlobalStatus::new(GraphicStatus::Erased, display_mode));
        }
        if let Some(status) = self.statuses.get_mut(object) {
            if status.add_selection_mode(mode) {
                debug!(?object, ?mode, "mode activated");
            }
        }
        Ok(())
    }

    /// Deactivate selection `mode` on `object`. Owners of that mode leave the
    /// selection and the detection.
    pub fn deactivate(&mut self, object: ObjectId, mode: SelectionMode) {
        let removed = self
            .statuses
            .get_mut(object)
            .is_some_and(|status| status.remove_selection_mode(mode));
        if !removed {
            return;
        }
        debug!(?object, ?mode, "mode deactivated");
        let owners = self.entity_owners_in(object, |m| m == mode);
        self.deselect_owners(&owners);
        if self
            .detection
            .last_picked()
            .is_some_and(|o| owners.contains(&o))
        {
            self.clear_dynamic_highlight();
        }
        self.detection.forget_owners(&owners);
    }

    /// Active selection modes of `object`, in activation order.
    pub fn activated_modes(&self, object: ObjectId) -> &[SelectionMode] {
        self.statuses
            .get(object)
            .map(GlobalStatus::selection_modes)
            .unwrap_or_default()
    }

    /// Owners of `object` created for `mode`, or for any active mode when
    /// `mode` is `None`.
    pub fn entity_owners(&self, object: ObjectId, mode: Option<SelectionMode>) -> Vec<OwnerId> {
        match mode {
            Some(mode) => self.entity_owners_in(object, |m| m == mode),
            None => {
                let active = self.activated_modes(object);
                self.entity_owners_in(object, |m| active.contains(&m))
            }
        }
    }

    // ── internals ───────────────────────────────────────────────────────

    fn show(&mut self, object: ObjectId) {
        match self.statuses.get_mut(object) {
            Some(status) if status.graphic_status() == GraphicStatus::Displayed => {}
            Some(status) => {
                status.set_graphic_status(GraphicStatus::Displayed);
                let mode = status.display_mode();
                self.pm.display(object, mode);
                debug!(?object, ?mode, "redisplayed");
            }
            None => {
                let mode = self.preferred_display_mode(object);
                let mut status = GlobalStatus::new(GraphicStatus::Displayed, mode);
                if self.settings.activate_on_display {
                    if let Some(selectable) = self.objects.get(&object) {
                        if selectable.global_owner().is_some() {
                            status.add_selection_mode(selectable.global_selection_mode());
                        }
                    }
                }
                self.statuses.insert(object, status);
                self.pm.display(object, mode);
                debug!(?object, ?mode, "displayed");
            }
        }
    }

    fn preferred_display_mode(&self, object: ObjectId) -> DisplayMode {
        self.objects
            .get(&object)
            .and_then(|selectable| selectable.display_mode())
            .unwrap_or(self.settings.default_display_mode)
    }

    fn entity_owners_in(
        &self,
        object: ObjectId,
        keep: impl Fn(SelectionMode) -> bool,
    ) -> Vec<OwnerId> {
        let Some(selectable) = self.objects.get(&object) else {
            return Vec::new();
        };
        (0_u32..)
            .zip(selectable.owners())
            .filter(|(_, entity)| keep(entity.mode()))
            .map(|(index, _)| OwnerId::new(object, index))
            .collect()
    }

    /// Drop every trace of `object` from the selection and the detection,
    /// erasing the highlights involved.
    fn forget_object(&mut self, object: ObjectId) {
        let owners: Vec<OwnerId> = self
            .selection
            .iter()
            .filter(|owner| owner.object == object)
            .collect();
        self.deselect_owners(&owners);
        if self.detection.last_picked().is_some_and(|o| o.object == object) {
            self.clear_dynamic_highlight();
        }
        self.detection.forget_object(object);
        if let Some(status) = self.statuses.get_mut(object) {
            status.set_hilight_status(false);
            status.set_hilight_style(None);
        }
    }

    /// Take `owners` out of the selection, resetting their flags and erasing
    /// their selection highlight.
    fn deselect_owners(&mut self, owners: &[OwnerId]) {
        let mut regroup = BTreeSet::new();
        for &owner in owners {
            if self.selection.remove(owner) != SelectStatus::Removed {
                continue;
            }
            self.set_owner_selected(owner, false);
            let Some(view) = self.owner_view(owner) else {
                continue;
            };
            if view.is_global {
                self.set_global_hilight(owner.object, None);
            }
            if !self.settings.auto_hilight {
                continue;
            }
            if view.entity.is_auto_hilight() {
                view.entity.unhilight(owner, &mut self.pm);
            } else {
                regroup.insert(owner.object);
            }
        }
        for object in regroup {
            self.clear_group(object);
            self.draw_selected_group(object);
        }
    }
}
