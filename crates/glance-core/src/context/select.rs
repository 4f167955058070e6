// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selection mutation: point confirm, region select, XOR toggling and
//! programmatic selection.

use glance_port::{
    ObjectId, OwnerId, PickingEngine, PixelRect, PresentationManager, View, ViewerPort,
};
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, warn};

use super::SelectionContext;
use crate::error::SelectionError;
use crate::selection::SelectStatus;
use crate::status::{GlobalStatus, PickStatus};

/// Region a selection pick runs over.
#[derive(Clone, Copy, Debug)]
enum Region<'a> {
    Rect(PixelRect),
    Polyline(&'a [[f64; 2]]),
}

impl<P, K, V> SelectionContext<P, K, V>
where
    P: PresentationManager,
    K: PickingEngine,
    V: ViewerPort,
{
    /// Replace the selection with the owner detected by the last hover.
    ///
    /// Nothing changes when that owner already is the only selected owner and
    /// does not force its highlight. With nothing detected the selection is
    /// cleared.
    #[instrument(level = "debug", skip(self))]
    pub fn select_detected(&mut self, update: bool) -> PickStatus {
        let Some(owner) = self.detection.last_picked() else {
            self.clear_selected(update);
            return self.pick_status();
        };
        if self.settings.auto_hilight {
            self.clear_dynamic_highlight();
        }
        let Some(entity) = self.entity(owner).copied() else {
            return self.pick_status();
        };
        if !entity.is_selected() || entity.is_forced_hilight() || self.selection.len() > 1 {
            self.set_selected_owner(owner, false);
            self.update_viewer(update);
        }
        self.pick_status()
    }

    /// Toggle the owner detected by the last hover in or out of the selection.
    #[instrument(level = "debug", skip(self))]
    pub fn shift_select_detected(&mut self, update: bool) -> PickStatus {
        if self.settings.auto_hilight {
            self.clear_dynamic_highlight();
        }
        if let Some(owner) = self.detection.last_picked() {
            self.add_or_remove_selected_owner(owner, update);
        }
        self.pick_status()
    }

    /// Replace the selection with every acceptable owner inside `rect`.
    #[instrument(level = "debug", skip(self, view), fields(viewer = ?view.viewer))]
    pub fn select_rect(
        &mut self,
        rect: PixelRect,
        view: &View,
        update: bool,
    ) -> Result<PickStatus, SelectionError> {
        self.check_view(view, "select_rect")?;
        Ok(self.replace_with_region(Region::Rect(rect), view, update))
    }

    /// Replace the selection with every acceptable owner inside the closed
    /// polyline `points`.
    #[instrument(level = "debug", skip(self, points, view), fields(points = points.len()))]
    pub fn select_polyline(
        &mut self,
        points: &[[f64; 2]],
        view: &View,
        update: bool,
    ) -> Result<PickStatus, SelectionError> {
        self.check_view(view, "select_polyline")?;
        Ok(self.replace_with_region(Region::Polyline(points), view, update))
    }

    /// Toggle every acceptable owner inside `rect`.
    #[instrument(level = "debug", skip(self, view), fields(viewer = ?view.viewer))]
    pub fn shift_select_rect(
        &mut self,
        rect: PixelRect,
        view: &View,
        update: bool,
    ) -> Result<PickStatus, SelectionError> {
        self.check_view(view, "shift_select_rect")?;
        Ok(self.toggle_region(Region::Rect(rect), view, update))
    }

    /// Toggle every acceptable owner inside the closed polyline `points`.
    #[instrument(level = "debug", skip(self, points, view), fields(points = points.len()))]
    pub fn shift_select_polyline(
        &mut self,
        points: &[[f64; 2]],
        view: &View,
        update: bool,
    ) -> Result<PickStatus, SelectionError> {
        self.check_view(view, "shift_select_polyline")?;
        Ok(self.toggle_region(Region::Polyline(points), view, update))
    }

    /// Empty the selection, erasing its highlight.
    pub fn clear_selected(&mut self, update: bool) {
        if self.selection.is_empty() {
            return;
        }
        if self.settings.auto_hilight {
            self.unhighlight_selected_owners(false);
        } else {
            self.reset_selected_flags();
        }
        self.selection.clear();
        if self.settings.auto_hilight {
            self.clear_dynamic_highlight();
        }
        self.update_viewer(update);
    }

    /// Make `object`'s global owner the only selected owner.
    ///
    /// An object not yet tracked is displayed first. Nothing is selected
    /// while the object's global selection mode is inactive. When the object
    /// already is the only, highlighted selection only its style is refreshed.
    pub fn set_selected(&mut self, object: ObjectId, update: bool) {
        if !self.statuses.contains(object) {
            if let Err(err) = self.display(object, false) {
                warn!(?err, "set_selected on unknown object");
                return;
            }
        }
        let Some(owner) = self.global_owner_of(object) else {
            debug!(?object, "object has no global owner; nothing to select");
            return;
        };
        let Some(view) = self.owner_view(owner) else {
            return;
        };
        let mode_active = self
            .statuses
            .get(object)
            .is_some_and(|s| s.is_mode_active(view.entity.mode()));
        if !mode_active {
            debug!(?object, "global selection mode inactive; nothing to select");
            return;
        }
        let style = self.styles.selection_style(view.custom_style, true);
        let hilighted = self
            .statuses
            .get(object)
            .is_some_and(GlobalStatus::is_hilighted);

        if self.settings.auto_hilight
            && self.selection.len() == 1
            && self.selection.contains(owner)
            && hilighted
        {
            if self.highlight_style_of(object) != Some(style) {
                self.hilight_with_color(object, style, update);
            }
            return;
        }

        if self.settings.auto_hilight {
            self.unhighlight_selected_owners(true);
        } else {
            self.reset_selected_flags();
        }
        self.selection.clear_and_select(owner);
        self.set_owner_selected(owner, true);
        if self.settings.auto_hilight {
            let display_mode = self.statuses.get(object).map(GlobalStatus::display_mode);
            self.highlight_global(object, &style, display_mode);
            self.set_global_hilight(object, Some(style));
        }
        debug!(?object, "selected");
        self.update_viewer(update);
    }

    /// Make `owner` the only selected owner.
    ///
    /// Owners of objects not displayed, or rejected by the filter chain, are
    /// ignored. Nothing changes when `owner` already is the only selected
    /// owner and does not force its highlight.
    pub fn set_selected_owner(&mut self, owner: OwnerId, update: bool) {
        if !self.accepts(owner) {
            return;
        }
        let Some(view) = self.owner_view(owner) else {
            return;
        };
        if self.selection.len() == 1 && view.entity.is_selected() && !view.entity.is_forced_hilight()
        {
            if view.is_global && self.settings.auto_hilight {
                let style = self.styles.selection_style(view.custom_style, true);
                if self.highlight_style_of(owner.object) != Some(style) {
                    self.hilight_with_color(owner.object, style, update);
                }
            }
            return;
        }
        if self.settings.auto_hilight {
            self.unhighlight_selected_owners(false);
        } else {
            self.reset_selected_flags();
        }
        self.selection.clear_and_select(owner);
        self.set_owner_selected(owner, true);
        if self.settings.auto_hilight {
            self.highlight_selected_owner(owner);
            if view.is_global {
                let style = self.styles.selection_style(view.custom_style, true);
                self.set_global_hilight(owner.object, Some(style));
            }
        }
        debug!(?owner, "selected owner");
        self.update_viewer(update);
    }

    /// Toggle `object`'s global owner in or out of the selection.
    pub fn add_or_remove_selected(&mut self, object: ObjectId, update: bool) {
        if !self.statuses.contains(object) {
            return;
        }
        if let Some(owner) = self.global_owner_of(object) {
            self.add_or_remove_selected_owner(owner, update);
        }
    }

    /// Toggle `owner` in or out of the selection.
    ///
    /// A selected owner can always be removed; adding one requires it to pass
    /// the filter chain.
    pub fn add_or_remove_selected_owner(&mut self, owner: OwnerId, update: bool) {
        let Some(view) = self.owner_view(owner) else {
            return;
        };
        if !view.entity.is_selected() && !self.accepts(owner) {
            return;
        }
        let added = self.selection.select(owner) == SelectStatus::Added;
        self.set_owner_selected(owner, added);
        debug!(?owner, added, "toggled");

        if self.settings.auto_hilight {
            if added {
                self.highlight_selected_owner(owner);
            } else if view.entity.is_auto_hilight() {
                view.entity.unhilight(owner, &mut self.pm);
            } else {
                self.clear_group(owner.object);
                self.draw_selected_group(owner.object);
            }
            if view.is_global {
                let style = added.then(|| self.styles.selection_style(view.custom_style, true));
                self.set_global_hilight(owner.object, style);
            }
        }
        self.update_viewer(update);
    }

    // ── region helpers ──────────────────────────────────────────────────

    fn replace_with_region(&mut self, region: Region<'_>, view: &View, update: bool) -> PickStatus {
        self.clear_selected(false);
        for owner in self.pick_region(region, view) {
            if self.selection.add_select(owner) == SelectStatus::Added {
                self.set_owner_selected(owner, true);
            }
        }
        debug!(selected = self.selection.len(), "region select");
        self.finish_region(update)
    }

    fn toggle_region(&mut self, region: Region<'_>, view: &View, update: bool) -> PickStatus {
        if self.settings.auto_hilight {
            self.unhilight_selected(false);
        }
        for owner in self.pick_region(region, view) {
            let added = self.selection.select(owner) == SelectStatus::Added;
            self.set_owner_selected(owner, added);
        }
        debug!(selected = self.selection.len(), "region toggle");
        self.finish_region(update)
    }

    fn finish_region(&mut self, update: bool) -> PickStatus {
        if self.settings.auto_hilight {
            self.hilight_selected(update);
        } else {
            self.update_viewer(update);
        }
        self.pick_status()
    }

    /// Pick `region` and return the accepted owners, nearest first, each once.
    fn pick_region(&mut self, region: Region<'_>, view: &View) -> Vec<OwnerId> {
        self.filters.set_disabled_objects(&view.hidden);
        match region {
            Region::Rect(rect) => self.picker.pick_rect(rect, view),
            Region::Polyline(points) => self.picker.pick_polyline(points, view),
        }
        let mut seen = FxHashSet::default();
        (1..=self.picker.nb_picked())
            .filter_map(|rank| self.picker.picked(rank))
            .filter(|owner| self.accepts(*owner))
            .filter(|owner| seen.insert(*owner))
            .collect()
    }
}
