// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Point confirm, region selection, XOR toggling and programmatic selection.

mod common;

use common::{
    assert_flags_match_selection, color_calls, context, global, shown, shown_with_subs, sub, view,
    Ctx,
};
use glance_core::{ContextSettings, ModeFilter, PickStatus};
use glance_port::{HighlightKind, ObjectId, PixelRect, SelectionMode, View, ViewId, ViewerId};

fn rect() -> PixelRect {
    PixelRect::from_corners((0, 0), (100, 100))
}

/// Three objects all inside [`rect`].
fn three_in_rect() -> (Ctx, [ObjectId; 3]) {
    let mut ctx = context();
    let ids = [shown(&mut ctx), shown(&mut ctx), shown(&mut ctx)];
    ctx.picker_mut().set_rect(rect(), ids.map(global));
    (ctx, ids)
}

#[test]
fn rectangle_over_three_owners_selects_all_three() {
    let (mut ctx, ids) = three_in_rect();

    let status = ctx.select_rect(rect(), &view(), true).unwrap();

    assert_eq!(status, PickStatus::SeveralSelected);
    assert_eq!(ctx.nb_selected(), 3);
    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), ids.map(global).to_vec());
    assert_eq!(ctx.first_selected_object(), Some(ids[0]));
    let selected = *ctx.styles().get(HighlightKind::Selected);
    for id in ids {
        assert!(ctx.is_selected(id));
        assert_eq!(ctx.presentation().owner_style(global(id)), Some(&selected));
        assert_eq!(ctx.highlight_style_of(id), Some(selected));
    }
    assert_eq!(ctx.viewer().update_count, 1);
    assert_flags_match_selection(&ctx);
}

#[test]
fn rectangle_replaces_the_previous_selection() {
    let (mut ctx, ids) = three_in_rect();
    let outside = shown(&mut ctx);
    ctx.set_selected(outside, false);
    assert!(ctx.presentation().is_owner_highlighted(global(outside)));

    let status = ctx.select_rect(rect(), &view(), false).unwrap();

    assert_eq!(status, PickStatus::SeveralSelected);
    assert!(!ctx.is_selected(outside));
    assert!(!ctx.presentation().is_owner_highlighted(global(outside)));
    assert_eq!(ctx.highlight_style_of(outside), None);
    assert!(ctx.is_selected(ids[2]));
    assert_flags_match_selection(&ctx);
}

#[test]
fn empty_rectangle_clears_the_selection() {
    let (mut ctx, ids) = three_in_rect();
    ctx.set_selected(ids[0], false);
    let elsewhere = PixelRect::from_corners((500, 500), (600, 600));

    let status = ctx.select_rect(elsewhere, &view(), false).unwrap();

    assert_eq!(status, PickStatus::NothingSelected);
    assert!(ctx.presentation().owner_highlights.is_empty());
    assert_flags_match_selection(&ctx);
}

#[test]
fn polyline_selects_what_the_engine_finds_inside() {
    let (mut ctx, ids) = three_in_rect();
    ctx.picker_mut().set_polyline([global(ids[1])]);
    let lasso = [[0.0, 0.0], [50.0, 0.0], [50.0, 50.0], [0.0, 50.0]];

    let status = ctx.select_polyline(&lasso, &view(), false).unwrap();

    assert_eq!(status, PickStatus::OneSelected);
    assert!(ctx.is_selected(ids[1]));
    assert_flags_match_selection(&ctx);
}

#[test]
fn region_select_honours_filters() {
    let mut ctx = context();
    let a = shown_with_subs(&mut ctx, SelectionMode(1), 2, true);
    ctx.picker_mut()
        .set_rect(rect(), [global(a), sub(a, 1), sub(a, 2)]);
    ctx.add_filter(Box::new(ModeFilter::new([SelectionMode(1)])));

    let status = ctx.select_rect(rect(), &view(), false).unwrap();

    assert_eq!(status, PickStatus::SeveralSelected);
    assert_eq!(
        ctx.selected_owners().collect::<Vec<_>>(),
        vec![sub(a, 1), sub(a, 2)]
    );
    assert!(!ctx.is_selected(a));
    let local = *ctx.styles().get(HighlightKind::LocalSelected);
    assert_eq!(ctx.presentation().owner_style(sub(a, 1)), Some(&local));
    assert_eq!(ctx.highlight_style_of(a), None);
    assert_flags_match_selection(&ctx);
}

#[test]
fn region_select_rejects_a_foreign_view() {
    let (mut ctx, _) = three_in_rect();
    let foreign = View::new(ViewId(2), ViewerId(99));

    assert!(ctx.select_rect(rect(), &foreign, true).is_err());
    assert!(ctx.shift_select_rect(rect(), &foreign, true).is_err());
    assert!(ctx.select_polyline(&[[0.0, 0.0]], &foreign, true).is_err());
    assert!(ctx.shift_select_polyline(&[[0.0, 0.0]], &foreign, true).is_err());
    assert_eq!(ctx.nb_selected(), 0);
    assert_eq!(ctx.picker().pick_count, 0);
}

#[test]
fn shift_rectangle_twice_toggles_back() {
    let (mut ctx, ids) = three_in_rect();
    let keep = PixelRect::from_corners((200, 200), (300, 300));
    ctx.picker_mut().set_rect(keep, [global(ids[0])]);
    ctx.select_rect(keep, &view(), false).unwrap();

    let status = ctx.shift_select_rect(rect(), &view(), false).unwrap();
    assert_eq!(status, PickStatus::SeveralSelected);
    assert_eq!(
        ctx.selected_owners().collect::<Vec<_>>(),
        vec![global(ids[1]), global(ids[2])]
    );
    assert!(!ctx.presentation().is_owner_highlighted(global(ids[0])));
    assert_flags_match_selection(&ctx);

    let status = ctx.shift_select_rect(rect(), &view(), false).unwrap();
    assert_eq!(status, PickStatus::OneSelected);
    assert_eq!(
        ctx.selected_owners().collect::<Vec<_>>(),
        vec![global(ids[0])]
    );
    assert!(ctx.presentation().is_owner_highlighted(global(ids[0])));
    assert!(!ctx.presentation().is_owner_highlighted(global(ids[1])));
    assert_flags_match_selection(&ctx);
}

#[test]
fn shift_polyline_toggles() {
    let (mut ctx, ids) = three_in_rect();
    ctx.picker_mut().set_polyline([global(ids[2])]);
    let lasso = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];

    ctx.shift_select_polyline(&lasso, &view(), false).unwrap();
    assert!(ctx.is_selected(ids[2]));
    ctx.shift_select_polyline(&lasso, &view(), false).unwrap();
    assert!(!ctx.is_selected(ids[2]));
    assert_flags_match_selection(&ctx);
}

#[test]
fn point_confirm_selects_the_detected_owner() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    ctx.picker_mut().set_point(3, 3, [global(a)]);
    ctx.move_to(3, 3, &view(), false).unwrap();

    let status = ctx.select_detected(true);

    assert_eq!(status, PickStatus::OneSelected);
    assert!(ctx.is_selected(a));
    assert!(ctx.presentation().immediate.is_empty());
    assert!(ctx.presentation().is_owner_highlighted(global(a)));
    assert_eq!(ctx.viewer().update_count, 1);
    assert_flags_match_selection(&ctx);
}

#[test]
fn point_confirm_on_the_sole_selected_owner_is_a_no_op() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    ctx.picker_mut().set_point(3, 3, [global(a)]);
    ctx.move_to(3, 3, &view(), false).unwrap();
    ctx.select_detected(false);
    ctx.presentation_mut().clear_log();
    let updates = ctx.viewer().update_count;

    let status = ctx.select_detected(true);

    assert_eq!(status, PickStatus::OneSelected);
    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), vec![global(a)]);
    assert_eq!(ctx.presentation().highlight_call_count(), 0);
    assert_eq!(ctx.viewer().update_count, updates);
}

#[test]
fn point_confirm_narrows_a_multiple_selection() {
    let (mut ctx, ids) = three_in_rect();
    ctx.select_rect(rect(), &view(), false).unwrap();
    ctx.picker_mut().set_point(7, 7, [global(ids[1])]);
    ctx.set_hilight_selected(true);
    ctx.move_to(7, 7, &view(), false).unwrap();

    let status = ctx.select_detected(false);

    assert_eq!(status, PickStatus::OneSelected);
    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), vec![global(ids[1])]);
    assert!(!ctx.presentation().is_owner_highlighted(global(ids[0])));
    assert_flags_match_selection(&ctx);
}

#[test]
fn point_confirm_over_nothing_clears_the_selection() {
    let (mut ctx, ids) = three_in_rect();
    ctx.set_selected(ids[0], false);
    ctx.move_to(0, 0, &view(), false).unwrap();

    let status = ctx.select_detected(false);

    assert_eq!(status, PickStatus::NothingSelected);
    assert!(!ctx.is_selected(ids[0]));
    assert_flags_match_selection(&ctx);
}

#[test]
fn shift_point_confirm_twice_toggles_back() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    let b = shown(&mut ctx);
    ctx.set_selected(b, false);
    ctx.picker_mut().set_point(3, 3, [global(a)]);
    ctx.move_to(3, 3, &view(), false).unwrap();

    assert_eq!(ctx.shift_select_detected(false), PickStatus::SeveralSelected);
    assert!(ctx.presentation().is_owner_highlighted(global(a)));
    assert_eq!(ctx.shift_select_detected(false), PickStatus::OneSelected);
    assert!(!ctx.presentation().is_owner_highlighted(global(a)));
    assert!(ctx.is_selected(b));
    assert_flags_match_selection(&ctx);
}

#[test]
fn shift_point_confirm_without_detection_changes_nothing() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    ctx.set_selected(a, false);

    assert_eq!(ctx.shift_select_detected(true), PickStatus::OneSelected);
    assert!(ctx.is_selected(a));
}

#[test]
fn clear_selected_is_idempotent() {
    let (mut ctx, _) = three_in_rect();
    ctx.select_rect(rect(), &view(), false).unwrap();

    ctx.clear_selected(true);
    assert_eq!(ctx.nb_selected(), 0);
    assert!(ctx.presentation().owner_highlights.is_empty());
    assert_eq!(ctx.viewer().update_count, 1);
    assert_flags_match_selection(&ctx);

    ctx.presentation_mut().clear_log();
    ctx.clear_selected(true);
    assert_eq!(ctx.nb_selected(), 0);
    assert!(ctx.presentation().calls.is_empty());
    assert_eq!(ctx.viewer().update_count, 1);
}

#[test]
fn set_selected_replaces_and_then_short_circuits() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    let b = shown(&mut ctx);

    ctx.set_selected(a, false);
    ctx.set_selected(b, true);
    assert!(!ctx.is_selected(a));
    assert!(ctx.is_selected(b));
    assert!(!ctx.presentation().is_owner_highlighted(global(a)));
    assert_flags_match_selection(&ctx);

    ctx.presentation_mut().clear_log();
    ctx.set_selected(b, false);
    assert_eq!(ctx.presentation().highlight_call_count(), 0);
    assert_eq!(ctx.nb_selected(), 1);
}

#[test]
fn set_selected_restyles_when_the_selected_style_changed() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    ctx.set_selected(a, false);
    let mut style = *ctx.styles().get(HighlightKind::Selected);
    style.color = [255, 0, 0, 255];
    ctx.styles_mut().set(HighlightKind::Selected, style);

    ctx.set_selected(a, false);

    assert_eq!(ctx.highlight_style_of(a), Some(style));
    assert_eq!(ctx.presentation().owner_style(global(a)), Some(&style));
}

#[test]
fn set_selected_displays_a_registered_object() {
    let mut ctx = context();
    let a = ctx.add_object(Box::new(glance_core::InteractiveObject::new()));
    assert!(!ctx.is_displayed(a));

    ctx.set_selected(a, false);

    assert!(ctx.is_displayed(a));
    assert!(ctx.is_selected(a));
}

#[test]
fn set_selected_owner_makes_a_sub_owner_the_only_selection() {
    let mut ctx = context();
    let a = shown_with_subs(&mut ctx, SelectionMode(2), 3, true);
    ctx.set_selected(a, false);

    ctx.set_selected_owner(sub(a, 2), false);

    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), vec![sub(a, 2)]);
    assert!(!ctx.is_selected(a));
    assert_eq!(ctx.highlight_style_of(a), None);
    assert!(ctx.presentation().is_owner_highlighted(sub(a, 2)));
    assert_flags_match_selection(&ctx);
}

#[test]
fn add_or_remove_toggles_objects() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    let b = shown(&mut ctx);

    ctx.add_or_remove_selected(a, false);
    ctx.add_or_remove_selected(b, false);
    assert_eq!(ctx.nb_selected(), 2);

    ctx.add_or_remove_selected(a, true);
    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), vec![global(b)]);
    assert_eq!(ctx.highlight_style_of(a), None);
    assert_eq!(ctx.viewer().update_count, 1);
    assert_flags_match_selection(&ctx);
}

#[test]
fn filter_blocks_adding_but_not_removing() {
    let mut ctx = context();
    let a = shown(&mut ctx);
    ctx.add_or_remove_selected(a, false);
    ctx.add_filter(Box::new(ModeFilter::new([SelectionMode(5)])));

    ctx.add_or_remove_selected(a, false);
    assert!(!ctx.is_selected(a));

    ctx.add_or_remove_selected(a, false);
    assert!(!ctx.is_selected(a));
    assert_flags_match_selection(&ctx);
}

#[test]
fn object_drawn_owners_are_highlighted_once_per_object() {
    let mut ctx = context();
    let a = shown_with_subs(&mut ctx, SelectionMode(1), 3, false);
    ctx.picker_mut()
        .set_rect(rect(), [sub(a, 1), sub(a, 2), sub(a, 3)]);

    ctx.select_rect(rect(), &view(), false).unwrap();

    assert_eq!(ctx.nb_selected(), 3);
    assert_eq!(color_calls(&ctx, a), 1);
    let local = *ctx.styles().get(HighlightKind::LocalSelected);
    assert_eq!(ctx.presentation().object_colors.get(&a), Some(&local));
    assert!(ctx.presentation().owner_highlights.is_empty());
    assert_flags_match_selection(&ctx);
}

#[test]
fn removing_one_object_drawn_owner_redraws_the_rest() {
    let mut ctx = context();
    let a = shown_with_subs(&mut ctx, SelectionMode(1), 3, false);
    ctx.picker_mut()
        .set_rect(rect(), [sub(a, 1), sub(a, 2), sub(a, 3)]);
    ctx.select_rect(rect(), &view(), false).unwrap();
    ctx.presentation_mut().clear_log();

    ctx.add_or_remove_selected_owner(sub(a, 2), false);
    assert_eq!(ctx.nb_selected(), 2);
    assert_eq!(color_calls(&ctx, a), 1);
    assert!(ctx.presentation().object_colors.contains_key(&a));

    ctx.add_or_remove_selected_owner(sub(a, 1), false);
    ctx.add_or_remove_selected_owner(sub(a, 3), false);
    assert_eq!(ctx.nb_selected(), 0);
    assert!(!ctx.presentation().object_colors.contains_key(&a));
    assert_flags_match_selection(&ctx);
}

#[test]
fn unhilight_selected_keeps_the_selection() {
    let (mut ctx, ids) = three_in_rect();
    ctx.select_rect(rect(), &view(), false).unwrap();

    ctx.unhilight_selected(true);
    assert_eq!(ctx.nb_selected(), 3);
    assert!(ctx.presentation().owner_highlights.is_empty());
    assert_eq!(ctx.highlight_style_of(ids[0]), None);
    assert_flags_match_selection(&ctx);

    ctx.hilight_selected(false);
    assert_eq!(ctx.presentation().owner_highlights.len(), 3);
    assert!(ctx.highlight_style_of(ids[0]).is_some());
}

#[test]
fn without_auto_hilight_only_logical_state_changes() {
    let (mut ctx, ids) = three_in_rect();
    ctx.set_settings(ContextSettings {
        auto_hilight: false,
        ..ContextSettings::default()
    });
    ctx.picker_mut().set_point(1, 1, [global(ids[0])]);
    ctx.presentation_mut().clear_log();

    ctx.move_to(1, 1, &view(), true).unwrap();
    ctx.select_rect(rect(), &view(), true).unwrap();
    ctx.set_selected(ids[1], false);
    ctx.add_or_remove_selected(ids[2], false);
    ctx.clear_selected(false);
    ctx.select_detected(false);

    assert_eq!(ctx.presentation().highlight_call_count(), 0);
    assert!(ctx.presentation().immediate.is_empty());
    assert_eq!(ctx.selected_owners().collect::<Vec<_>>(), vec![global(ids[0])]);
    assert_eq!(ctx.viewer().update_count, 1);
    assert_flags_match_selection(&ctx);
}
