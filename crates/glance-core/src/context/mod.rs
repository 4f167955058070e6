// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The interactive selection context.
//!
//! Operations are split by concern: object registry and selection modes
//! (`registry`), hover detection (`detect`), selection mutation (`select`)
//! and highlight drawing (`highlight`). All of them share the state held by
//! [`SelectionContext`] and keep one invariant: an owner's `selected` flag is
//! set exactly when the owner is in the selection set.

mod detect;
mod highlight;
mod registry;
mod select;

use std::collections::BTreeMap;

use glance_port::{
    EntityOwner, HighlightStyle, ObjectId, OwnerId, PickingEngine, PresentationManager,
    Selectable, View, ViewerPort,
};

use crate::detection::DetectionState;
use crate::error::SelectionError;
use crate::filter::{FilterChain, OwnerInfo, SelectionFilter};
use crate::selection::SelectionSet;
use crate::settings::ContextSettings;
use crate::status::{GlobalStatusTable, GraphicStatus, PickStatus};
use crate::style::StyleTable;

/// Selection and highlight state for one viewer.
///
/// `P` draws highlights, `K` answers picking queries and `V` is the viewer
/// the context is bound to. Views passed to pointer operations must belong to
/// that viewer.
pub struct SelectionContext<P, K, V> {
    pm: P,
    picker: K,
    viewer: V,
    objects: BTreeMap<ObjectId, Box<dyn Selectable>>,
    next_object: u32,
    statuses: GlobalStatusTable,
    selection: SelectionSet,
    detection: DetectionState,
    filters: FilterChain,
    styles: StyleTable,
    settings: ContextSettings,
}

/// Copy of what the context needs to know about one owner.
#[derive(Clone, Copy, Debug)]
struct OwnerView {
    entity: EntityOwner,
    is_global: bool,
    custom_style: Option<HighlightStyle>,
}

impl<P, K, V> SelectionContext<P, K, V>
where
    P: PresentationManager,
    K: PickingEngine,
    V: ViewerPort,
{
    /// Context with default settings and styles.
    pub fn new(pm: P, picker: K, viewer: V) -> Self {
        Self::with_settings(pm, picker, viewer, ContextSettings::default())
    }

    /// Context with explicit settings.
    pub fn with_settings(pm: P, picker: K, viewer: V, settings: ContextSettings) -> Self {
        Self {
            pm,
            picker,
            viewer,
            objects: BTreeMap::new(),
            next_object: 0,
            statuses: GlobalStatusTable::new(),
            selection: SelectionSet::new(),
            detection: DetectionState::new(),
            filters: FilterChain::new(),
            styles: StyleTable::new(),
            settings,
        }
    }

    /// Give the adapters back.
    pub fn into_parts(self) -> (P, K, V) {
        (self.pm, self.picker, self.viewer)
    }

    /// Presentation manager.
    pub fn presentation(&self) -> &P {
        &self.pm
    }

    /// Presentation manager, mutably.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.pm
    }

    /// Picking engine.
    pub fn picker(&self) -> &K {
        &self.picker
    }

    /// Picking engine, mutably.
    pub fn picker_mut(&mut self) -> &mut K {
        &mut self.picker
    }

    /// Bound viewer.
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Bound viewer, mutably.
    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    // ── settings ────────────────────────────────────────────────────────

    /// Current behaviour switches.
    pub fn settings(&self) -> &ContextSettings {
        &self.settings
    }

    /// Replace the behaviour switches. Drawn highlights are left as they are.
    pub fn set_settings(&mut self, settings: ContextSettings) {
        self.settings = settings;
    }

    /// Toggle automatic highlighting.
    pub fn set_auto_hilight(&mut self, on: bool) {
        self.settings.auto_hilight = on;
    }

    /// Toggle hover highlighting of already selected owners.
    pub fn set_hilight_selected(&mut self, on: bool) {
        self.settings.hilight_selected = on;
    }

    /// Highlight styles.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Highlight styles, mutably. New styles apply to the next highlight.
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    // ── filters ─────────────────────────────────────────────────────────

    /// Install a selection filter.
    pub fn add_filter(&mut self, filter: Box<dyn SelectionFilter>) {
        self.filters.add(filter);
    }

    /// Remove every selection filter.
    pub fn remove_filters(&mut self) {
        self.filters.clear();
    }

    /// Installed filter chain.
    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    // ── queries ─────────────────────────────────────────────────────────

    /// Number of selected owners.
    pub fn nb_selected(&self) -> usize {
        self.selection.len()
    }

    /// Selected owners in selection order.
    pub fn selected_owners(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.selection.iter()
    }

    /// Whether `owner` is selected.
    pub fn is_owner_selected(&self, owner: OwnerId) -> bool {
        self.entity(owner).is_some_and(EntityOwner::is_selected)
    }

    /// Whether `object` is selected as a whole: its global selection mode is
    /// active and its global owner is selected.
    pub fn is_selected(&self, object: ObjectId) -> bool {
        let (Some(status), Some(selectable)) =
            (self.statuses.get(object), self.objects.get(&object))
        else {
            return false;
        };
        if !status.is_mode_active(selectable.global_selection_mode()) {
            return false;
        }
        selectable
            .global_owner()
            .and_then(|index| selectable.owner(index))
            .is_some_and(EntityOwner::is_selected)
    }

    /// Object of the first selected owner.
    pub fn first_selected_object(&self) -> Option<ObjectId> {
        self.selection.first().map(|owner| owner.object)
    }

    /// Owner detected by the last hover or cursor move.
    pub fn detected_owner(&self) -> Option<OwnerId> {
        self.detection.last_picked()
    }

    /// Whether something is detected.
    pub fn has_detected(&self) -> bool {
        self.detection.last_picked().is_some()
    }

    /// Accepted candidates of the last hover pick, nearest first.
    pub fn detected_owners(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.detection.sequence().iter().map(|d| d.owner)
    }

    /// Position of the detection cursor (1-based, 0 when not on a candidate).
    pub fn detected_cursor(&self) -> usize {
        self.detection.current()
    }

    // ── internals shared by the operation modules ───────────────────────

    fn check_view(&self, view: &View, op: &'static str) -> Result<(), SelectionError> {
        let expected = self.viewer.id();
        if view.viewer == expected {
            Ok(())
        } else {
            Err(SelectionError::InvalidView {
                op,
                expected,
                found: view.viewer,
            })
        }
    }

    fn entity(&self, owner: OwnerId) -> Option<&EntityOwner> {
        self.objects
            .get(&owner.object)
            .and_then(|object| object.owner(owner.index))
    }

    fn owner_view(&self, owner: OwnerId) -> Option<OwnerView> {
        let object = self.objects.get(&owner.object)?;
        let entity = *object.owner(owner.index)?;
        Some(OwnerView {
            entity,
            is_global: object.global_owner() == Some(owner.index),
            custom_style: object.custom_hilight_style(),
        })
    }

    fn global_owner_of(&self, object: ObjectId) -> Option<OwnerId> {
        let selectable = self.objects.get(&object)?;
        let index = selectable.global_owner()?;
        selectable
            .owner(index)
            .map(|_| OwnerId::new(object, index))
    }

    fn global_view(&self, object: ObjectId) -> Option<(OwnerId, OwnerView)> {
        let owner = self.global_owner_of(object)?;
        self.owner_view(owner).map(|view| (owner, view))
    }

    /// Owner resolves to a live entity of a displayed object, its selection
    /// mode is active on that object, and it passes the filter chain.
    /// Picking engines do not know which modes are active.
    fn accepts(&self, owner: OwnerId) -> bool {
        let Some(status) = self
            .statuses
            .get(owner.object)
            .filter(|s| s.graphic_status() == GraphicStatus::Displayed)
        else {
            return false;
        };
        self.entity(owner).is_some_and(|entity| {
            status.is_mode_active(entity.mode())
                && self.filters.is_ok(&OwnerInfo {
                    owner,
                    mode: entity.mode(),
                })
        })
    }

    fn set_owner_selected(&mut self, owner: OwnerId, selected: bool) {
        if let Some(entity) = self
            .objects
            .get_mut(&owner.object)
            .and_then(|object| object.owner_mut(owner.index))
        {
            entity.set_selected(selected);
        }
    }

    fn set_global_hilight(&mut self, object: ObjectId, style: Option<HighlightStyle>) {
        if let Some(status) = self.statuses.get_mut(object) {
            status.set_hilight_status(style.is_some());
            status.set_hilight_style(style);
        }
    }

    fn pick_status(&self) -> PickStatus {
        PickStatus::from_count(self.selection.len())
    }

    fn update_viewer(&mut self, update: bool) {
        if update {
            self.viewer.update();
        }
    }
}

impl<P, K, V> core::fmt::Debug for SelectionContext<P, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionContext")
            .field("objects", &self.objects.len())
            .field("statuses", &self.statuses.len())
            .field("selection", &self.selection)
            .field("detection", &self.detection)
            .field("filters", &self.filters)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
