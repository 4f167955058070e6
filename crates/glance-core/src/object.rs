// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! General-purpose selectable object.

use glance_port::{
    DisplayMode, EntityOwner, HighlightStyle, ObjectId, PresentationManager, Selectable,
    SelectionMode,
};

/// Plain [`Selectable`] holding a list of owners.
///
/// Covers the common case of one global owner plus optional sub-entity owners
/// (faces, edges...). Hosts with richer objects implement [`Selectable`]
/// directly.
#[derive(Clone, Debug, Default)]
pub struct InteractiveObject {
    owners: Vec<EntityOwner>,
    global_owner: Option<u32>,
    global_mode: SelectionMode,
    display_mode: Option<DisplayMode>,
    hilight_mode: Option<DisplayMode>,
    custom_style: Option<HighlightStyle>,
    selected_group: Vec<u32>,
}

impl InteractiveObject {
    /// Object with a single global owner in selection mode 0.
    pub fn new() -> Self {
        let mut object = Self::default();
        object.global_owner = Some(object.add_owner(EntityOwner::new(SelectionMode(0))));
        object
    }

    /// Object with no owner at all; nothing of it can be picked.
    pub fn without_owners() -> Self {
        Self::default()
    }

    /// Append `owner` and return its index.
    pub fn add_owner(&mut self, owner: EntityOwner) -> u32 {
        let index = u32::try_from(self.owners.len()).unwrap_or(u32::MAX);
        self.owners.push(owner);
        index
    }

    /// Append `count` sub-entity owners for `mode`; returns their indices.
    pub fn add_sub_owners(&mut self, mode: SelectionMode, count: u32) -> Vec<u32> {
        (0..count)
            .map(|_| self.add_owner(EntityOwner::new(mode)))
            .collect()
    }

    /// Choose which owner stands for the whole object.
    pub fn set_global_owner(&mut self, index: Option<u32>) {
        self.global_owner = index;
    }

    /// Selection mode of the whole object.
    pub fn set_global_selection_mode(&mut self, mode: SelectionMode) {
        self.global_mode = mode;
    }

    /// Preferred presentation mode.
    pub fn set_display_mode(&mut self, mode: Option<DisplayMode>) {
        self.display_mode = mode;
    }

    /// Presentation mode used for highlighting.
    pub fn set_hilight_mode(&mut self, mode: Option<DisplayMode>) {
        self.hilight_mode = mode;
    }

    /// Object-specific highlight style.
    pub fn set_custom_style(&mut self, style: Option<HighlightStyle>) {
        self.custom_style = style;
    }

    /// Owners currently covered by the combined selection highlight.
    pub fn selected_group(&self) -> &[u32] {
        &self.selected_group
    }
}

impl Selectable for InteractiveObject {
    fn owners(&self) -> &[EntityOwner] {
        &self.owners
    }

    fn owners_mut(&mut self) -> &mut [EntityOwner] {
        &mut self.owners
    }

    fn global_owner(&self) -> Option<u32> {
        self.global_owner
    }

    fn global_selection_mode(&self) -> SelectionMode {
        self.global_mode
    }

    fn display_mode(&self) -> Option<DisplayMode> {
        self.display_mode
    }

    fn hilight_mode(&self) -> Option<DisplayMode> {
        self.hilight_mode
    }

    fn custom_hilight_style(&self) -> Option<HighlightStyle> {
        self.custom_style
    }

    fn hilight_selected(
        &mut self,
        object: ObjectId,
        pm: &mut dyn PresentationManager,
        style: &HighlightStyle,
        owners: &[u32],
    ) {
        self.selected_group = owners.to_vec();
        pm.color(object, style, self.hilight_mode.unwrap_or_default());
    }

    fn clear_selected(&mut self) {
        self.selected_group.clear();
    }
}
