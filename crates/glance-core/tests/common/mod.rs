// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use glance_core::{InteractiveObject, SelectionContext};
use glance_mock::{MockPresentation, MockViewer, PresentationCall, ScriptedPicker};
use glance_port::{EntityOwner, ObjectId, OwnerId, SelectionMode, View, ViewId, ViewerId};

/// Context wired to the headless adapters.
pub type Ctx = SelectionContext<MockPresentation, ScriptedPicker, MockViewer>;

/// Viewer every test context is bound to.
pub const VIEWER: ViewerId = ViewerId(1);

/// A view of [`VIEWER`] with nothing hidden.
pub fn view() -> View {
    View::new(ViewId(1), VIEWER)
}

/// Fresh context with default settings.
pub fn context() -> Ctx {
    SelectionContext::new(
        MockPresentation::new(),
        ScriptedPicker::new(),
        MockViewer::new(VIEWER),
    )
}

/// Display a plain object with one global owner.
pub fn shown(ctx: &mut Ctx) -> ObjectId {
    ctx.display_new(Box::new(InteractiveObject::new()), false)
}

/// Display an object with a global owner plus `count` sub-entity owners in
/// `mode`, and activate that mode. Sub owners sit at indices `1..=count`.
pub fn shown_with_subs(ctx: &mut Ctx, mode: SelectionMode, count: u32, auto: bool) -> ObjectId {
    let mut object = InteractiveObject::new();
    for _ in 0..count {
        object.add_owner(EntityOwner::new(mode).with_auto_hilight(auto));
    }
    let id = ctx.display_new(Box::new(object), false);
    ctx.activate(id, mode).expect("object is registered");
    id
}

/// Global owner of an [`InteractiveObject`].
pub fn global(object: ObjectId) -> OwnerId {
    OwnerId::new(object, 0)
}

/// Sub-entity owner `index` of `object`.
pub fn sub(object: ObjectId, index: u32) -> OwnerId {
    OwnerId::new(object, index)
}

/// Every owner flag agrees with selection-set membership.
pub fn assert_flags_match_selection(ctx: &Ctx) {
    let selected: Vec<OwnerId> = ctx.selected_owners().collect();
    for object in ctx.objects() {
        let selectable = ctx.object(object).expect("listed object exists");
        for (index, entity) in (0_u32..).zip(selectable.owners()) {
            let owner = OwnerId::new(object, index);
            assert_eq!(
                entity.is_selected(),
                selected.contains(&owner),
                "flag of {owner:?} disagrees with the selection set"
            );
        }
    }
}

/// Number of `Color` calls logged for `object`.
pub fn color_calls(ctx: &Ctx, object: ObjectId) -> usize {
    ctx.presentation()
        .calls
        .iter()
        .filter(|c| matches!(c, PresentationCall::Color(o, ..) if *o == object))
        .count()
}
