// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Highlight drawing: hover, selection, whole-object and sub-intensity.

use std::collections::{BTreeMap, BTreeSet};

use glance_port::{
    DisplayMode, HighlightStyle, ImmediateDraw, ObjectId, OwnerId, PickingEngine,
    PresentationManager, ViewerPort,
};
use tracing::{trace, warn};

use super::SelectionContext;
use crate::status::{GlobalStatus, GraphicStatus};
use crate::style::hilight_mode;

impl<P, K, V> SelectionContext<P, K, V>
where
    P: PresentationManager,
    K: PickingEngine,
    V: ViewerPort,
{
    /// Draw every selected owner with its selection style.
    ///
    /// Auto-highlight owners are drawn one by one; the others are grouped per
    /// object and each object draws its group once. Only global owners update
    /// their object's highlight status.
    pub fn hilight_selected(&mut self, update: bool) {
        self.clear_dynamic_highlight();
        let mut groups: BTreeMap<ObjectId, Vec<u32>> = BTreeMap::new();
        for owner in self.selection.to_vec() {
            let Some(view) = self.owner_view(owner) else {
                warn!(?owner, "selected owner without object; skipped");
                continue;
            };
            let Some(display_mode) = self.statuses.get(owner.object).map(GlobalStatus::display_mode)
            else {
                warn!(?owner, "selected owner without status; skipped");
                continue;
            };
            let style = self.styles.selection_style(view.custom_style, view.is_global);
            if view.is_global {
                self.set_global_hilight(owner.object, Some(style));
            }
            self.set_owner_selected(owner, true);
            if view.entity.is_auto_hilight() {
                let mode = self.mode_for(owner.object, &style, Some(display_mode));
                self.pm.highlight_owner(owner, &style, mode);
            } else {
                groups.entry(owner.object).or_default().push(owner.index);
            }
        }
        for (object, indices) in groups {
            self.draw_group(object, &indices, None);
        }
        self.update_viewer(update);
    }

    /// Erase the highlight of every selected owner.
    ///
    /// Visual only: the selection and the owners' flags are kept.
    pub fn unhilight_selected(&mut self, update: bool) {
        let mut grouped = BTreeSet::new();
        for owner in self.selection.to_vec() {
            let Some(view) = self.owner_view(owner) else {
                warn!(?owner, "selected owner without object; skipped");
                continue;
            };
            if view.is_global {
                self.set_global_hilight(owner.object, None);
            }
            if view.entity.is_auto_hilight() {
                view.entity.unhilight(owner, &mut self.pm);
            } else {
                grouped.insert(owner.object);
            }
        }
        for object in grouped {
            self.clear_group(object);
        }
        self.update_viewer(update);
    }

    /// Highlight the whole of `object` with `style`.
    pub fn hilight_with_color(&mut self, object: ObjectId, style: HighlightStyle, update: bool) {
        let Some(display_mode) = self.statuses.get(object).map(GlobalStatus::display_mode) else {
            return;
        };
        self.set_global_hilight(object, Some(style));
        self.highlight_global(object, &style, Some(display_mode));
        self.update_viewer(update);
    }

    /// Remove the whole-object highlight of `object`, restoring sub-intensity
    /// if it is on.
    pub fn unhilight(&mut self, object: ObjectId, update: bool) {
        if !self.statuses.contains(object) {
            return;
        }
        self.set_global_hilight(object, None);
        self.unhighlight_global(object);
        self.restore_sub_intensity(object);
        self.update_viewer(update);
    }

    /// Style `object` is currently highlighted with.
    pub fn highlight_style_of(&self, object: ObjectId) -> Option<HighlightStyle> {
        self.statuses
            .get(object)
            .filter(|status| status.is_hilighted())
            .and_then(|status| status.hilight_style().copied())
    }

    /// Dim `object`, or every displayed object, with the sub-intensity style.
    pub fn sub_intensity_on(&mut self, object: Option<ObjectId>, update: bool) {
        let style = self.styles.sub_intensity_style();
        for target in self.displayed_targets(object) {
            let Some(status) = self.statuses.get_mut(target) else {
                continue;
            };
            status.set_sub_intensity(true);
            let mode = status.display_mode();
            self.pm.color(target, &style, mode);
        }
        self.update_viewer(update);
    }

    /// Undo [`sub_intensity_on`](Self::sub_intensity_on), redrawing any
    /// whole-object highlight the dimming covered.
    pub fn sub_intensity_off(&mut self, object: Option<ObjectId>, update: bool) {
        for target in self.displayed_targets(object) {
            let Some(status) = self.statuses.get_mut(target) else {
                continue;
            };
            if !status.is_sub_intensity_on() {
                continue;
            }
            status.set_sub_intensity(false);
            let restyle = status
                .hilight_style()
                .copied()
                .filter(|_| status.is_hilighted());
            let mode = status.display_mode();
            self.pm.unhighlight(target);
            if let Some(style) = restyle {
                self.highlight_global(target, &style, Some(mode));
            }
        }
        self.update_viewer(update);
    }

    // ── private drawing helpers ─────────────────────────────────────────

    pub(super) fn clear_dynamic_highlight(&mut self) {
        if self.detection.last_picked().is_some() {
            self.pm.clear_immediate_draw();
        }
    }

    /// Hover highlight of `owner`, drawn in immediate mode.
    pub(super) fn highlight_hover(&mut self, owner: OwnerId) {
        let Some(view) = self.owner_view(owner) else {
            return;
        };
        let style = self.styles.hover_style(view.custom_style, view.is_global);
        let mode = self.mode_for(owner.object, &style, None);
        trace!(?owner, ?mode, "hover highlight");
        let viewer = self.viewer.id();
        let mut draw = ImmediateDraw::begin(&mut self.pm, viewer);
        view.entity
            .hilight_with_color(owner, &mut *draw, &style, mode);
    }

    /// Selection highlight of a single newly selected owner.
    pub(super) fn highlight_selected_owner(&mut self, owner: OwnerId) {
        let Some(view) = self.owner_view(owner) else {
            return;
        };
        if !view.entity.is_auto_hilight() {
            self.clear_group(owner.object);
            self.draw_selected_group(owner.object);
            return;
        }
        let style = self.styles.selection_style(view.custom_style, view.is_global);
        let display_mode = self.statuses.get(owner.object).map(GlobalStatus::display_mode);
        let mode = self.mode_for(owner.object, &style, display_mode);
        view.entity
            .hilight_with_color(owner, &mut self.pm, &style, mode);
    }

    /// Draw the selected non-auto owners of `object` as one group.
    pub(super) fn draw_selected_group(&mut self, object: ObjectId) {
        let indices = self.selected_group_of(object);
        if !indices.is_empty() {
            self.draw_group(object, &indices, None);
        }
    }

    /// Erase the group highlight of `object`.
    pub(super) fn clear_group(&mut self, object: ObjectId) {
        self.pm.unhighlight(object);
        if let Some(selectable) = self.objects.get_mut(&object) {
            selectable.clear_selected();
        }
    }

    /// Highlight the whole object through its global owner, or through the
    /// object itself when it has none.
    pub(super) fn highlight_global(
        &mut self,
        object: ObjectId,
        style: &HighlightStyle,
        display_mode: Option<DisplayMode>,
    ) {
        let mode = self.mode_for(object, style, display_mode);
        match self.global_view(object) {
            None => self.pm.color(object, style, mode),
            Some((owner, view)) if view.entity.is_auto_hilight() => {
                view.entity.hilight_with_color(owner, &mut self.pm, style, mode);
            }
            Some((owner, _)) => {
                let mut indices = self.selected_group_of(object);
                if indices.is_empty() {
                    indices.push(owner.index);
                }
                self.draw_group(object, &indices, Some(*style));
            }
        }
    }

    /// Inverse of [`highlight_global`](Self::highlight_global).
    pub(super) fn unhighlight_global(&mut self, object: ObjectId) {
        match self.global_view(object) {
            Some((owner, view)) if view.entity.is_auto_hilight() => {
                view.entity.unhilight(owner, &mut self.pm);
            }
            Some(_) => self.clear_group(object),
            None => self.pm.unhighlight(object),
        }
    }

    /// Erase the selection highlight of every selected owner and reset their
    /// flags. The set itself is left to the caller.
    pub(super) fn unhighlight_selected_owners(&mut self, restore_sub_intensity: bool) {
        let mut grouped = BTreeSet::new();
        for owner in self.selection.to_vec() {
            self.set_owner_selected(owner, false);
            let Some(view) = self.owner_view(owner) else {
                warn!(?owner, "selected owner without object; skipped");
                continue;
            };
            if !self.statuses.contains(owner.object) {
                warn!(?owner, "selected owner without status; skipped");
                continue;
            }
            if view.entity.is_auto_hilight() {
                view.entity.unhilight(owner, &mut self.pm);
            } else {
                grouped.insert(owner.object);
            }
            if view.is_global {
                self.set_global_hilight(owner.object, None);
            }
        }
        for object in grouped {
            self.clear_group(object);
        }
        if restore_sub_intensity {
            let dimmed: Vec<ObjectId> = self
                .statuses
                .objects()
                .filter(|o| {
                    self.statuses
                        .get(*o)
                        .is_some_and(GlobalStatus::is_sub_intensity_on)
                })
                .collect();
            for object in dimmed {
                self.restore_sub_intensity(object);
            }
        }
    }

    /// Reset the flags of every selected owner without drawing.
    pub(super) fn reset_selected_flags(&mut self) {
        for owner in self.selection.to_vec() {
            self.set_owner_selected(owner, false);
        }
    }

    fn restore_sub_intensity(&mut self, object: ObjectId) {
        let Some(status) = self.statuses.get(object) else {
            return;
        };
        if !status.is_sub_intensity_on() {
            return;
        }
        let mode = status.display_mode();
        let style = self.styles.sub_intensity_style();
        self.pm.color(object, &style, mode);
    }

    fn selected_group_of(&self, object: ObjectId) -> Vec<u32> {
        self.selection
            .iter()
            .filter(|owner| owner.object == object)
            .filter(|owner| {
                self.entity(*owner)
                    .is_some_and(|entity| !entity.is_auto_hilight())
            })
            .map(|owner| owner.index)
            .collect()
    }

    /// Let `object` draw the owners at `indices` as one highlight. Without an
    /// explicit style the selection style is used, global when the group
    /// holds the global owner.
    fn draw_group(&mut self, object: ObjectId, indices: &[u32], style: Option<HighlightStyle>) {
        let Some(selectable) = self.objects.get_mut(&object) else {
            return;
        };
        let style = style.unwrap_or_else(|| {
            let has_global = selectable
                .global_owner()
                .is_some_and(|g| indices.contains(&g));
            self.styles
                .selection_style(selectable.custom_hilight_style(), has_global)
        });
        trace!(?object, owners = indices.len(), "group highlight");
        selectable.hilight_selected(object, &mut self.pm, &style, indices);
    }

    fn mode_for(
        &self,
        object: ObjectId,
        style: &HighlightStyle,
        display_mode: Option<DisplayMode>,
    ) -> DisplayMode {
        self.objects.get(&object).map_or_else(
            || display_mode.unwrap_or_default(),
            |selectable| hilight_mode(selectable.as_ref(), style, display_mode),
        )
    }

    fn displayed_targets(&self, object: Option<ObjectId>) -> Vec<ObjectId> {
        let displayed = |o: &ObjectId| {
            self.statuses
                .get(*o)
                .is_some_and(|s| s.graphic_status() == GraphicStatus::Displayed)
        };
        match object {
            Some(o) => core::iter::once(o).filter(displayed).collect(),
            None => self.statuses.objects().filter(displayed).collect(),
        }
    }
}
