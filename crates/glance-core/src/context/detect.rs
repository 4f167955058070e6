// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hover detection and the detection cursor.

use glance_port::{
    EntityOwner, OwnerId, PickingEngine, PickingStrategy, PresentationManager, View, ViewerPort,
};
use tracing::{debug, instrument};

use super::SelectionContext;
use crate::detection::Detected;
use crate::error::SelectionError;
use crate::status::DetectionStatus;

impl<P, K, V> SelectionContext<P, K, V>
where
    P: PresentationManager,
    K: PickingEngine,
    V: ViewerPort,
{
    /// Detect what lies under the pointer at `(x, y)` in `view`.
    ///
    /// Rebuilds the detection sequence and puts the cursor on its first
    /// entry. Hovering the owner already detected draws nothing, unless the
    /// owner forces its highlight. Otherwise the previous hover highlight is
    /// cleared and, with auto-highlight on, the new owner is drawn in
    /// immediate mode. Selected owners are only hover-highlighted when
    /// `hilight_selected` is set.
    ///
    /// The viewer is updated once at the end, when something changed and
    /// `redraw_on_update` is set.
    #[instrument(level = "trace", skip(self, view), fields(viewer = ?view.viewer))]
    pub fn move_to(
        &mut self,
        x: i32,
        y: i32,
        view: &View,
        redraw_on_update: bool,
    ) -> Result<DetectionStatus, SelectionError> {
        self.check_view(view, "move_to")?;
        self.detection.reset_sequence();
        self.filters.set_disabled_objects(&view.hidden);
        self.picker.pick_point(x, y, view);

        let mut topmost = None;
        let mut suppressed = false;
        for rank in 1..=self.picker.nb_picked() {
            let Some(owner) = self.picker.picked(rank).filter(|o| self.accepts(*o)) else {
                if self.settings.picking_strategy == PickingStrategy::OnlyTopmost {
                    suppressed = true;
                }
                continue;
            };
            if topmost.is_none() && !suppressed {
                topmost = Some(owner);
            }
            self.detection.push(rank, owner);
        }

        let previous = self.detection.last_picked();
        let mut changed = false;
        let status = if let Some(owner) = topmost {
            self.detection.rewind_to_first();
            let forced = self
                .entity(owner)
                .is_some_and(EntityOwner::is_forced_hilight);
            if previous == Some(owner) && !forced {
                return Ok(self.detection_status(owner));
            }
            if previous.is_some() {
                self.clear_dynamic_highlight();
                changed = true;
            }
            self.detection.set_last_picked(Some(owner));
            let selected = self.is_owner_selected(owner);
            if self.settings.auto_hilight && (!selected || self.settings.hilight_selected) {
                self.highlight_hover(owner);
                changed = true;
            }
            debug!(?owner, selected, "detected");
            self.detection_status(owner)
        } else {
            if self.settings.auto_hilight && previous.is_some() {
                self.clear_dynamic_highlight();
                changed = true;
            }
            self.detection.set_last_picked(None);
            DetectionStatus::Nothing
        };

        if changed && redraw_on_update {
            self.viewer.update();
        }
        Ok(status)
    }

    /// Move the detection cursor to the next candidate, wrapping to the
    /// first, and hover-highlight it.
    ///
    /// Returns the new 1-based cursor position, 0 when there is nothing to
    /// cycle through.
    pub fn hilight_next_detected(
        &mut self,
        view: &View,
        redraw_immediate: bool,
    ) -> Result<usize, SelectionError> {
        self.check_view(view, "hilight_next_detected")?;
        self.pm.clear_immediate_draw();
        let entry = self.detection.advance();
        Ok(self.show_detected(entry, redraw_immediate))
    }

    /// Move the detection cursor to the previous candidate, wrapping to the
    /// last, and hover-highlight it.
    pub fn hilight_previous_detected(
        &mut self,
        view: &View,
        redraw_immediate: bool,
    ) -> Result<usize, SelectionError> {
        self.check_view(view, "hilight_previous_detected")?;
        self.pm.clear_immediate_draw();
        let entry = self.detection.retreat();
        Ok(self.show_detected(entry, redraw_immediate))
    }

    fn show_detected(&mut self, entry: Option<Detected>, redraw_immediate: bool) -> usize {
        let Some(Detected { owner, .. }) = entry else {
            return 0;
        };
        if self.entity(owner).is_none() {
            return 0;
        }
        self.highlight_hover(owner);
        self.detection.set_last_picked(Some(owner));
        if redraw_immediate {
            let viewer = self.viewer.id();
            self.pm.redraw_immediate(viewer);
            self.viewer.redraw_immediate();
        }
        self.detection.current()
    }

    fn detection_status(&self, owner: OwnerId) -> DetectionStatus {
        if self.is_owner_selected(owner) {
            DetectionStatus::Selected
        } else {
            DetectionStatus::OnlyOneDetected
        }
    }
}
