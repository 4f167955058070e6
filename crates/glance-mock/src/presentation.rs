// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock presentation manager.
//!
//! MockPresentation keeps the highlights currently drawn in maps and logs
//! every call, so tests can check both the visible state and the traffic.

use std::collections::BTreeMap;

use glance_port::{DisplayMode, HighlightStyle, ObjectId, OwnerId, PresentationManager, ViewerId};

/// One call received by [`MockPresentation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationCall {
    /// `color(object, style, mode)`.
    Color(ObjectId, HighlightStyle, DisplayMode),
    /// `unhighlight(object)`.
    Unhighlight(ObjectId),
    /// `highlight_owner(owner, style, mode)`; `immediate` tells whether it
    /// happened inside an immediate-draw bracket.
    HighlightOwner {
        /// Highlighted owner.
        owner: OwnerId,
        /// Style used.
        style: HighlightStyle,
        /// Presentation mode used.
        mode: DisplayMode,
        /// Drawn in immediate mode.
        immediate: bool,
    },
    /// `unhighlight_owner(owner)`.
    UnhighlightOwner(OwnerId),
    /// `display(object, mode)`.
    Display(ObjectId, DisplayMode),
    /// `erase(object)`.
    Erase(ObjectId),
    /// `begin_immediate_draw()`.
    BeginImmediate,
    /// `end_immediate_draw(viewer)`.
    EndImmediate(ViewerId),
    /// `clear_immediate_draw()`.
    ClearImmediate,
    /// `redraw_immediate(viewer)`.
    RedrawImmediate(ViewerId),
}

/// Mock presentation manager for testing.
///
/// Retained highlights live in `owner_highlights` and `object_colors`;
/// immediate-mode highlights live in `immediate` until the layer is cleared.
#[derive(Debug, Default)]
pub struct MockPresentation {
    /// Objects currently displayed, with their presentation mode.
    pub displayed: BTreeMap<ObjectId, DisplayMode>,
    /// Retained owner highlights.
    pub owner_highlights: BTreeMap<OwnerId, HighlightStyle>,
    /// Whole-object colors.
    pub object_colors: BTreeMap<ObjectId, HighlightStyle>,
    /// Owners drawn in the immediate layer since it was last cleared.
    pub immediate: Vec<OwnerId>,
    /// Every call, in order.
    pub calls: Vec<PresentationCall>,
    open_brackets: u32,
}

impl MockPresentation {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an immediate-draw bracket is open.
    pub fn in_immediate_draw(&self) -> bool {
        self.open_brackets > 0
    }

    /// Number of drawing calls (`color` and `highlight_owner`) logged.
    pub fn highlight_call_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    PresentationCall::Color(..) | PresentationCall::HighlightOwner { .. }
                )
            })
            .count()
    }

    /// Whether `owner` has a retained highlight.
    pub fn is_owner_highlighted(&self, owner: OwnerId) -> bool {
        self.owner_highlights.contains_key(&owner)
    }

    /// Style of `owner`'s retained highlight.
    pub fn owner_style(&self, owner: OwnerId) -> Option<&HighlightStyle> {
        self.owner_highlights.get(&owner)
    }

    /// Drop the call log, keeping the drawn state.
    pub fn clear_log(&mut self) {
        self.calls.clear();
    }
}

impl PresentationManager for MockPresentation {
    fn color(&mut self, object: ObjectId, style: &HighlightStyle, mode: DisplayMode) {
        self.calls.push(PresentationCall::Color(object, *style, mode));
        self.object_colors.insert(object, *style);
    }

    fn unhighlight(&mut self, object: ObjectId) {
        self.calls.push(PresentationCall::Unhighlight(object));
        self.object_colors.remove(&object);
    }

    fn highlight_owner(&mut self, owner: OwnerId, style: &HighlightStyle, mode: DisplayMode) {
        let immediate = self.in_immediate_draw();
        self.calls.push(PresentationCall::HighlightOwner {
            owner,
            style: *style,
            mode,
            immediate,
        });
        if immediate {
            self.immediate.push(owner);
        } else {
            self.owner_highlights.insert(owner, *style);
        }
    }

    fn unhighlight_owner(&mut self, owner: OwnerId) {
        self.calls.push(PresentationCall::UnhighlightOwner(owner));
        self.owner_highlights.remove(&owner);
    }

    fn display(&mut self, object: ObjectId, mode: DisplayMode) {
        self.calls.push(PresentationCall::Display(object, mode));
        self.displayed.insert(object, mode);
    }

    fn erase(&mut self, object: ObjectId) {
        self.calls.push(PresentationCall::Erase(object));
        self.displayed.remove(&object);
        self.object_colors.remove(&object);
        self.owner_highlights.retain(|owner, _| owner.object != object);
    }

    fn begin_immediate_draw(&mut self) {
        self.calls.push(PresentationCall::BeginImmediate);
        self.open_brackets += 1;
    }

    fn end_immediate_draw(&mut self, viewer: ViewerId) {
        self.calls.push(PresentationCall::EndImmediate(viewer));
        self.open_brackets = self.open_brackets.saturating_sub(1);
    }

    fn clear_immediate_draw(&mut self) {
        self.calls.push(PresentationCall::ClearImmediate);
        self.immediate.clear();
    }

    fn redraw_immediate(&mut self, viewer: ViewerId) {
        self.calls.push(PresentationCall::RedrawImmediate(viewer));
    }
}
