// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Operation outcomes and per-object bookkeeping.

use std::collections::BTreeMap;

use glance_port::{DisplayMode, HighlightStyle, ObjectId, SelectionMode};

/// Result of a hover detection ([`crate::SelectionContext::move_to`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionStatus {
    /// Nothing acceptable under the pointer.
    Nothing,
    /// The detected owner is already selected.
    Selected,
    /// One owner detected, not selected.
    OnlyOneDetected,
}

/// Result shared by every selection-mutating operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickStatus {
    /// The selection is empty.
    NothingSelected,
    /// Exactly one owner is selected.
    OneSelected,
    /// Two or more owners are selected.
    SeveralSelected,
}

impl PickStatus {
    /// Classify a selection size.
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NothingSelected,
            1 => Self::OneSelected,
            _ => Self::SeveralSelected,
        }
    }
}

/// Whether a tracked object is currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphicStatus {
    /// Shown in the viewer.
    Displayed,
    /// Known to the context but hidden.
    Erased,
}

/// Bookkeeping for one tracked object.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalStatus {
    graphic_status: GraphicStatus,
    display_mode: DisplayMode,
    selection_modes: Vec<SelectionMode>,
    is_hilighted: bool,
    hilight_style: Option<HighlightStyle>,
    sub_intensity_on: bool,
}

impl GlobalStatus {
    /// Fresh status for an object shown in `display_mode`.
    pub fn new(graphic_status: GraphicStatus, display_mode: DisplayMode) -> Self {
        Self {
            graphic_status,
            display_mode,
            selection_modes: Vec::new(),
            is_hilighted: false,
            hilight_style: None,
            sub_intensity_on: false,
        }
    }

    /// Displayed or erased.
    pub fn graphic_status(&self) -> GraphicStatus {
        self.graphic_status
    }

    /// Set the displayed/erased state.
    pub fn set_graphic_status(&mut self, status: GraphicStatus) {
        self.graphic_status = status;
    }

    /// Presentation mode the object is shown in.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Change the presentation mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Active selection modes in activation order.
    pub fn selection_modes(&self) -> &[SelectionMode] {
        &self.selection_modes
    }

    /// Whether `mode` is active.
    pub fn is_mode_active(&self, mode: SelectionMode) -> bool {
        self.selection_modes.contains(&mode)
    }

    /// Activate `mode`; returns `false` when it already was.
    pub fn add_selection_mode(&mut self, mode: SelectionMode) -> bool {
        if self.is_mode_active(mode) {
            return false;
        }
        self.selection_modes.push(mode);
        true
    }

    /// Deactivate `mode`; returns `false` when it was not active.
    pub fn remove_selection_mode(&mut self, mode: SelectionMode) -> bool {
        let before = self.selection_modes.len();
        self.selection_modes.retain(|m| *m != mode);
        before != self.selection_modes.len()
    }

    /// Whether the whole object is highlighted.
    pub fn is_hilighted(&self) -> bool {
        self.is_hilighted
    }

    /// Set the whole-object highlight flag.
    pub fn set_hilight_status(&mut self, hilighted: bool) {
        self.is_hilighted = hilighted;
    }

    /// Style of the whole-object highlight, if any.
    pub fn hilight_style(&self) -> Option<&HighlightStyle> {
        self.hilight_style.as_ref()
    }

    /// Set or clear the whole-object highlight style.
    pub fn set_hilight_style(&mut self, style: Option<HighlightStyle>) {
        self.hilight_style = style;
    }

    /// Whether the object is shown with the sub-intensity highlight.
    pub fn is_sub_intensity_on(&self) -> bool {
        self.sub_intensity_on
    }

    /// Switch the sub-intensity flag.
    pub fn set_sub_intensity(&mut self, on: bool) {
        self.sub_intensity_on = on;
    }
}

/// Status of every tracked object, keyed by handle.
///
/// An entry exists from the first display of an object until it is removed
/// from the context.
#[derive(Clone, Debug, Default)]
pub struct GlobalStatusTable {
    entries: BTreeMap<ObjectId, GlobalStatus>,
}

impl GlobalStatusTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `object`, replacing any previous status.
    pub fn insert(&mut self, object: ObjectId, status: GlobalStatus) {
        self.entries.insert(object, status);
    }

    /// Stop tracking `object`.
    pub fn remove(&mut self, object: ObjectId) -> Option<GlobalStatus> {
        self.entries.remove(&object)
    }

    /// Status of `object`.
    pub fn get(&self, object: ObjectId) -> Option<&GlobalStatus> {
        self.entries.get(&object)
    }

    /// Mutable status of `object`.
    pub fn get_mut(&mut self, object: ObjectId) -> Option<&mut GlobalStatus> {
        self.entries.get_mut(&object)
    }

    /// Whether `object` is tracked.
    pub fn contains(&self, object: ObjectId) -> bool {
        self.entries.contains_key(&object)
    }

    /// Tracked objects in handle order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.entries.keys().copied()
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no object is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
