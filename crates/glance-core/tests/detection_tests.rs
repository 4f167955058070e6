// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Hover detection and the detection cursor.

mod common;

use common::{context, global, shown, view, Ctx, VIEWER};
use glance_core::{ContextSettings, DetectionStatus, InteractiveObject, ObjectFilter, SelectionError};
use glance_mock::PresentationCall;
use glance_port::{
    EntityOwner, HighlightKind, ObjectId, PickingStrategy, SelectionMode, View, ViewId, ViewerId,
};

/// Two stacked objects under (10, 10), `a` nearest.
fn stacked() -> (Ctx, ObjectId, ObjectId) {
    let mut ctx = context();
    let a = shown(&mut ctx);
    let b = shown(&mut ctx);
    ctx.picker_mut().set_point(10, 10, [global(a), global(b)]);
    (ctx, a, b)
}

#[test]
fn move_to_highlights_the_topmost_owner_in_immediate_mode() {
    let (mut ctx, a, b) = stacked();

    let status = ctx.move_to(10, 10, &view(), true).unwrap();

    assert_eq!(status, DetectionStatus::OnlyOneDetected);
    assert_eq!(ctx.detected_owner(), Some(global(a)));
    assert_eq!(ctx.detected_cursor(), 1);
    assert_eq!(
        ctx.detected_owners().collect::<Vec<_>>(),
        vec![global(a), global(b)]
    );
    let pm = ctx.presentation();
    assert_eq!(pm.immediate, vec![global(a)]);
    assert!(!pm.in_immediate_draw());
    assert!(pm.calls.iter().any(|c| matches!(
        c,
        PresentationCall::HighlightOwner { owner, style, immediate: true, .. }
            if *owner == global(a) && *style == *ctx.styles().get(HighlightKind::Dynamic)
    )));
    assert_eq!(ctx.viewer().update_count, 1);
}

#[test]
fn hovering_the_same_owner_again_draws_nothing() {
    let (mut ctx, _, _) = stacked();
    ctx.move_to(10, 10, &view(), true).unwrap();
    ctx.presentation_mut().clear_log();

    let status = ctx.move_to(10, 10, &view(), true).unwrap();

    assert_eq!(status, DetectionStatus::OnlyOneDetected);
    assert!(ctx.presentation().calls.is_empty());
    assert_eq!(ctx.viewer().update_count, 1);
}

#[test]
fn moving_to_another_owner_keeps_a_single_dynamic_highlight() {
    let (mut ctx, a, b) = stacked();
    ctx.picker_mut().set_point(20, 20, [global(b)]);

    ctx.move_to(10, 10, &view(), false).unwrap();
    ctx.move_to(20, 20, &view(), false).unwrap();

    assert_eq!(ctx.presentation().immediate, vec![global(b)]);
    assert_eq!(ctx.detected_owner(), Some(global(b)));
    assert!(!ctx.presentation().immediate.contains(&global(a)));
    assert_eq!(ctx.viewer().update_count, 0);
}

#[test]
fn empty_space_clears_the_detection() {
    let (mut ctx, _, _) = stacked();
    ctx.move_to(10, 10, &view(), true).unwrap();

    let status = ctx.move_to(0, 0, &view(), true).unwrap();

    assert_eq!(status, DetectionStatus::Nothing);
    assert!(!ctx.has_detected());
    assert_eq!(ctx.detected_cursor(), 0);
    assert!(ctx.presentation().immediate.is_empty());
    assert_eq!(ctx.viewer().update_count, 2);
}

#[test]
fn forced_owner_is_redrawn_on_every_hover() {
    let mut ctx = context();
    let mut object = InteractiveObject::without_owners();
    let index = object.add_owner(EntityOwner::new(SelectionMode(0)).with_forced_hilight(true));
    object.set_global_owner(Some(index));
    let a = ctx.display_new(Box::new(object), false);
    ctx.picker_mut().set_point(1, 1, [global(a)]);

    ctx.move_to(1, 1, &view(), false).unwrap();
    ctx.presentation_mut().clear_log();
    ctx.move_to(1, 1, &view(), false).unwrap();

    assert_eq!(ctx.presentation().highlight_call_count(), 1);
    assert_eq!(ctx.presentation().immediate, vec![global(a)]);
}

#[test]
fn selected_owner_is_hover_highlighted_only_on_request() {
    let (mut ctx, a, _) = stacked();
    ctx.set_selected(a, false);

    let status = ctx.move_to(10, 10, &view(), false).unwrap();
    assert_eq!(status, DetectionStatus::Selected);
    assert!(ctx.presentation().immediate.is_empty());

    ctx.set_hilight_selected(true);
    ctx.move_to(0, 0, &view(), false).unwrap();
    let status = ctx.move_to(10, 10, &view(), false).unwrap();
    assert_eq!(status, DetectionStatus::Selected);
    assert_eq!(ctx.presentation().immediate, vec![global(a)]);
}

#[test]
fn filtered_out_candidates_are_skipped() {
    let (mut ctx, _, b) = stacked();
    ctx.add_filter(Box::new(ObjectFilter::new([b])));

    let status = ctx.move_to(10, 10, &view(), false).unwrap();

    assert_eq!(status, DetectionStatus::OnlyOneDetected);
    assert_eq!(ctx.detected_owner(), Some(global(b)));
    assert_eq!(ctx.detected_owners().collect::<Vec<_>>(), vec![global(b)]);
}

#[test]
fn only_topmost_strategy_suppresses_detection_behind_a_rejected_candidate() {
    let (mut ctx, _, b) = stacked();
    ctx.add_filter(Box::new(ObjectFilter::new([b])));
    ctx.set_settings(ContextSettings {
        picking_strategy: PickingStrategy::OnlyTopmost,
        ..ContextSettings::default()
    });

    let status = ctx.move_to(10, 10, &view(), false).unwrap();

    assert_eq!(status, DetectionStatus::Nothing);
    assert!(!ctx.has_detected());
    assert_eq!(ctx.detected_owners().collect::<Vec<_>>(), vec![global(b)]);
    assert_eq!(ctx.detected_cursor(), 0);

    // The accepted candidate is still reachable through the cursor.
    assert_eq!(ctx.hilight_next_detected(&view(), false).unwrap(), 1);
    assert_eq!(ctx.detected_owner(), Some(global(b)));
}

#[test]
fn objects_hidden_in_the_view_are_not_detected() {
    let (mut ctx, a, b) = stacked();
    let mut hiding = view();
    hiding.hide(a);

    ctx.move_to(10, 10, &hiding, false).unwrap();
    assert_eq!(ctx.detected_owner(), Some(global(b)));

    ctx.move_to(10, 10, &view(), false).unwrap();
    assert_eq!(ctx.detected_owner(), Some(global(a)));
}

#[test]
fn erased_objects_are_not_detected() {
    let (mut ctx, a, b) = stacked();
    ctx.erase(a, false);

    ctx.move_to(10, 10, &view(), false).unwrap();

    assert_eq!(ctx.detected_owner(), Some(global(b)));
}

#[test]
fn view_of_another_viewer_is_rejected_without_side_effects() {
    let (mut ctx, _, _) = stacked();
    let foreign = View::new(ViewId(9), ViewerId(7));

    let err = ctx.move_to(10, 10, &foreign, true).unwrap_err();

    assert_eq!(
        err,
        SelectionError::InvalidView {
            op: "move_to",
            expected: VIEWER,
            found: ViewerId(7),
        }
    );
    assert_eq!(ctx.picker().pick_count, 0);
    assert!(ctx.presentation().calls.iter().all(|c| matches!(c, PresentationCall::Display(..))));
    assert!(ctx.hilight_next_detected(&foreign, false).is_err());
    assert!(ctx.hilight_previous_detected(&foreign, false).is_err());
}

/// Three stacked objects under (5, 5), hovered.
fn cycling() -> (Ctx, [ObjectId; 3]) {
    let mut ctx = context();
    let ids = [shown(&mut ctx), shown(&mut ctx), shown(&mut ctx)];
    ctx.picker_mut().set_point(5, 5, ids.map(global));
    ctx.move_to(5, 5, &view(), false).unwrap();
    (ctx, ids)
}

#[test]
fn next_detected_cycles_back_to_the_first() {
    let (mut ctx, ids) = cycling();

    assert_eq!(ctx.hilight_next_detected(&view(), false).unwrap(), 2);
    assert_eq!(ctx.presentation().immediate, vec![global(ids[1])]);
    assert_eq!(ctx.hilight_next_detected(&view(), false).unwrap(), 3);
    assert_eq!(ctx.hilight_next_detected(&view(), false).unwrap(), 1);

    assert_eq!(ctx.detected_owner(), Some(global(ids[0])));
    assert_eq!(ctx.presentation().immediate, vec![global(ids[0])]);
}

#[test]
fn previous_detected_wraps_and_undoes_next() {
    let (mut ctx, ids) = cycling();

    assert_eq!(ctx.hilight_next_detected(&view(), false).unwrap(), 2);
    assert_eq!(ctx.hilight_previous_detected(&view(), false).unwrap(), 1);
    assert_eq!(ctx.detected_owner(), Some(global(ids[0])));

    assert_eq!(ctx.hilight_previous_detected(&view(), false).unwrap(), 3);
    assert_eq!(ctx.detected_owner(), Some(global(ids[2])));
}

#[test]
fn cursor_redraws_the_immediate_layer_on_request() {
    let (mut ctx, _) = cycling();

    ctx.hilight_next_detected(&view(), true).unwrap();
    ctx.hilight_next_detected(&view(), false).unwrap();

    assert_eq!(ctx.viewer().redraw_immediate_count, 1);
    let redraws = ctx
        .presentation()
        .calls
        .iter()
        .filter(|c| matches!(c, PresentationCall::RedrawImmediate(v) if *v == VIEWER))
        .count();
    assert_eq!(redraws, 1);
}

#[test]
fn cursor_on_empty_detection_reports_zero() {
    let mut ctx = context();
    shown(&mut ctx);

    assert_eq!(ctx.hilight_next_detected(&view(), true).unwrap(), 0);
    assert_eq!(ctx.hilight_previous_detected(&view(), true).unwrap(), 0);
    assert_eq!(ctx.viewer().redraw_immediate_count, 0);
}
