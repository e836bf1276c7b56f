use proptest::prelude::*;
use zonekit_core::{EditorError, LatLng, ZoneId, ZoneShape, MAX_RADIUS_M};
use zonekit_designer::{DetachedSurface, InteractionState, ZoneUpdate};

use crate::common::two_zone_editor;

fn draft_radius(editor: &zonekit_designer::ZoneEditor) -> u32 {
    match editor.draft().map(|d| &d.shape) {
        Some(ZoneShape::Radius { radius, .. }) => *radius,
        other => panic!("expected radius draft, got {other:?}"),
    }
}

#[test]
fn test_drag_far_away_clamps_to_max() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.begin_drag(&a, LatLng::new(0.0, 0.009)).unwrap();

    // Roughly 111 km north of the centre.
    let update = editor.update_drag(LatLng::new(1.0, 0.0)).unwrap();
    assert_eq!(update.radius, MAX_RADIUS_M);
    assert!(update.clamped);
    assert_eq!(draft_radius(&editor), 50_000);
}

#[test]
fn test_every_move_is_applied() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.begin_drag(&a, LatLng::new(0.0, 0.009)).unwrap();

    let mut last = 0;
    for step in 1..=5 {
        let update = editor
            .update_drag(LatLng::new(0.0, 0.002 * f64::from(step)))
            .unwrap();
        assert!(update.radius > last);
        last = update.radius;
        assert_eq!(draft_radius(&editor), last);
    }
}

#[test]
fn test_drag_then_commit_persists_radius() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.begin_drag(&a, LatLng::new(0.0, 0.009)).unwrap();
    editor.update_drag(LatLng::new(0.0, 0.02)).unwrap();

    // Committing mid-drag is not allowed.
    assert!(matches!(
        editor.commit_edit(&a, &ZoneUpdate::new(), &DetachedSurface),
        Err(EditorError::InvalidStateTransition { .. })
    ));

    editor.end_drag().unwrap();
    let zone = editor
        .commit_edit(&a, &ZoneUpdate::new(), &DetachedSurface)
        .unwrap();
    assert!(matches!(zone.shape, ZoneShape::Radius { radius: 2224, .. }));
    assert_eq!(editor.state(), &InteractionState::Idle);
}

#[test]
fn test_drag_on_other_zone_discards_previous_draft() {
    let mut editor = two_zone_editor();
    editor.select_for_edit(&ZoneId::from("b")).unwrap();
    editor
        .update_draft(&ZoneId::from("b"), &ZoneUpdate::new().name("changed"))
        .unwrap();

    editor
        .begin_drag(&ZoneId::from("a"), LatLng::new(0.0, 0.009))
        .unwrap();
    assert_eq!(
        editor.draft().unwrap().id.as_ref(),
        Some(&ZoneId::from("a"))
    );
    assert_eq!(editor.zone(&ZoneId::from("b")).unwrap().name, "Zone b");
}

#[test]
fn test_drag_polygon_is_rejected() {
    let mut editor = two_zone_editor();
    let err = editor
        .begin_drag(&ZoneId::from("b"), LatLng::new(0.5, 0.5))
        .unwrap_err();
    assert!(matches!(err, EditorError::ShapeMismatch { .. }));
    assert_eq!(editor.state(), &InteractionState::Idle);
}

#[test]
fn test_cancel_after_drag_restores_radius() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.begin_drag(&a, LatLng::new(0.0, 0.009)).unwrap();
    editor.update_drag(LatLng::new(0.0, 0.05)).unwrap();
    editor.end_drag().unwrap();
    editor.cancel_edit(&a).unwrap();
    assert!(matches!(
        editor.zone(&a).unwrap().shape,
        ZoneShape::Radius { radius: 1000, .. }
    ));
}

proptest! {
    #[test]
    fn prop_drag_radius_stays_in_range(lat in -89.0f64..89.0, lng in -179.0f64..179.0) {
        let mut editor = two_zone_editor();
        editor.begin_drag(&ZoneId::from("a"), LatLng::new(0.0, 0.0)).unwrap();
        let update = editor.update_drag(LatLng::new(lat, lng)).unwrap();
        prop_assert!(update.radius <= MAX_RADIUS_M);
        prop_assert_eq!(draft_radius(&editor), update.radius);
    }
}
