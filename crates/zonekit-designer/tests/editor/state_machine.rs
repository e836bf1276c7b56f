use zonekit_core::{
    normalize_zone, EditorError, LatLng, RawZone, ZoneField, ZoneId, ZoneShape, ZoneType,
};
use zonekit_designer::{DetachedSurface, InteractionState, ZoneEditor, ZoneUpdate};

use crate::common::two_zone_editor;

#[test]
fn test_select_discards_other_draft() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    let b = ZoneId::from("b");

    editor.select_for_edit(&a).unwrap();
    editor
        .update_draft(&a, &ZoneUpdate::new().name("Renamed"))
        .unwrap();

    editor.select_for_edit(&b).unwrap();
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: b.clone() });
    assert_eq!(editor.draft().unwrap().id.as_ref(), Some(&b));

    // The pending rename of `a` is gone, not merged.
    assert_eq!(editor.zone(&a).unwrap().name, "Zone a");
    editor.select_for_edit(&a).unwrap();
    assert_eq!(editor.draft().unwrap().name, "Zone a");
}

#[test]
fn test_reselecting_keeps_draft() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();
    editor
        .update_draft(&a, &ZoneUpdate::new().delivery_fee(9.0))
        .unwrap();
    editor.select_for_edit(&a).unwrap();
    assert_eq!(editor.draft().unwrap().delivery_fee, Some(9.0));
}

#[test]
fn test_update_draft_for_unselected_zone_is_rejected() {
    let mut editor = two_zone_editor();
    editor.select_for_edit(&ZoneId::from("a")).unwrap();
    let err = editor
        .update_draft(&ZoneId::from("b"), &ZoneUpdate::new().name("x"))
        .unwrap_err();
    assert!(matches!(err, EditorError::NotEditing { .. }));
}

#[test]
fn test_commit_edit_replaces_zone_and_returns_to_idle() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    let before = editor.revision();

    editor.select_for_edit(&a).unwrap();
    let zone = editor
        .commit_edit(
            &a,
            &ZoneUpdate::new()
                .name("  Centro  ")
                .delivery_fee(6.5)
                .radius(2500),
            &DetachedSurface,
        )
        .unwrap();

    assert_eq!(zone.name, "Centro");
    assert_eq!(zone.delivery_fee, 6.5);
    assert_eq!(zone.color, "#3b82f6");
    assert_eq!(
        zone.shape,
        ZoneShape::Radius {
            center: LatLng::new(0.0, 0.0),
            radius: 2500
        }
    );
    assert_eq!(editor.state(), &InteractionState::Idle);
    assert!(editor.draft().is_none());
    assert_eq!(editor.revision(), before + 1);
}

#[test]
fn test_validation_failure_blocks_commit() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();

    let err = editor
        .commit_edit(
            &a,
            &ZoneUpdate::new().name("   ").delivery_fee(-1.0),
            &DetachedSurface,
        )
        .unwrap_err();

    match err {
        EditorError::Validation(v) => {
            assert!(v.has(ZoneField::Name));
            assert!(v.has(ZoneField::DeliveryFee));
        }
        other => panic!("unexpected error {other:?}"),
    }
    // Still editing, draft kept for correction, committed zone untouched.
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: a.clone() });
    assert_eq!(editor.draft().unwrap().name, "   ");
    assert_eq!(editor.zone(&a).unwrap().name, "Zone a");
    assert!(!editor.is_dirty());
}

#[test]
fn test_oversized_radius_blocks_commit() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();
    let err = editor
        .commit_edit(&a, &ZoneUpdate::new().radius(60_000), &DetachedSurface)
        .unwrap_err();
    assert!(matches!(err, EditorError::Validation(ref v) if v.has(ZoneField::Radius)));
}

#[test]
fn test_commit_create_rejects_invalid_draft() {
    let mut editor = ZoneEditor::new(LatLng::new(-15.78, -47.93));
    let draft = editor.start_create(ZoneType::Polygon).with_delivery_fee(2.0);
    let err = editor.commit_create(draft).unwrap_err();
    assert!(matches!(err, EditorError::Validation(ref v) if v.fields == vec![ZoneField::Name]));
    assert_eq!(editor.zone_count(), 0);
    assert_eq!(editor.revision(), 0);
}

#[test]
fn test_commit_create_generates_unique_ids() {
    let mut editor = ZoneEditor::new(LatLng::new(-15.78, -47.93));
    let first = editor
        .commit_create(
            editor
                .start_create(ZoneType::Radius)
                .with_name("A")
                .with_delivery_fee(1.0),
        )
        .unwrap()
        .id
        .clone();
    let second = editor
        .commit_create(
            editor
                .start_create(ZoneType::Radius)
                .with_name("B")
                .with_delivery_fee(1.0),
        )
        .unwrap()
        .id
        .clone();
    assert_ne!(first, second);
    assert_eq!(editor.zones()[1].id, second);
}

#[test]
fn test_remove_zone_mid_edit_returns_to_idle() {
    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    editor.select_for_edit(&b).unwrap();

    let removed = editor.remove_zone(&b).unwrap();
    assert_eq!(removed.id, b);
    assert_eq!(editor.state(), &InteractionState::Idle);
    assert!(editor.draft().is_none());
    assert_eq!(editor.zone_count(), 1);
}

#[test]
fn test_remove_other_zone_keeps_edit() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();
    editor.remove_zone(&ZoneId::from("b")).unwrap();
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: a });
}

#[test]
fn test_move_zone_changes_priority() {
    let mut editor = two_zone_editor();
    editor.move_zone(&ZoneId::from("b"), 0).unwrap();
    let ids: Vec<&str> = editor.zones().iter().map(|z| z.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(editor.is_dirty());

    editor.move_zone(&ZoneId::from("b"), 99).unwrap();
    let ids: Vec<&str> = editor.zones().iter().map(|z| z.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_move_to_same_index_is_not_a_change() {
    let mut editor = two_zone_editor();
    editor.move_zone(&ZoneId::from("a"), 0).unwrap();
    assert!(!editor.is_dirty());
}

#[test]
fn test_polygon_commit_reads_ring_from_surface() {
    use zonekit_designer::MapSurface;

    struct FixedRing;
    impl MapSurface for FixedRing {
        fn polygon_ring(&self, _zone_id: &ZoneId) -> Option<Vec<[f64; 2]>> {
            Some(vec![[10.0, 20.0], [12.0, 20.0], [12.0, 22.0], [10.0, 22.0]])
        }
    }

    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    editor.select_for_edit(&b).unwrap();
    let zone = editor
        .commit_edit(&b, &ZoneUpdate::new(), &FixedRing)
        .unwrap();

    let ZoneShape::Polygon { coordinates } = &zone.shape else {
        panic!("expected polygon");
    };
    assert_eq!(coordinates[0], LatLng::new(20.0, 10.0));
    assert_eq!(coordinates[1], LatLng::new(20.0, 12.0));
    assert!(zone.contains(LatLng::new(21.0, 11.0)));
}

#[test]
fn test_degenerate_ring_blocks_commit() {
    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    editor.select_for_edit(&b).unwrap();
    editor
        .edit_polygon_ring(&b, vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)])
        .unwrap();
    let err = editor
        .commit_edit(&b, &ZoneUpdate::new(), &DetachedSurface)
        .unwrap_err();
    assert!(matches!(err, EditorError::Validation(ref v) if v.has(ZoneField::Coordinates)));
}

struct ClosedRing(Vec<[f64; 2]>);

impl zonekit_designer::MapSurface for ClosedRing {
    fn polygon_ring(&self, _zone_id: &ZoneId) -> Option<Vec<[f64; 2]>> {
        Some(self.0.clone())
    }
}

#[test]
fn test_closed_surface_ring_is_stored_open() {
    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    editor.select_for_edit(&b).unwrap();
    let surface = ClosedRing(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]);
    let zone = editor
        .commit_edit(&b, &ZoneUpdate::new(), &surface)
        .unwrap()
        .clone();

    let ZoneShape::Polygon { coordinates } = &zone.shape else {
        panic!("expected polygon");
    };
    assert_eq!(coordinates.len(), 4);
    assert_ne!(coordinates.first(), coordinates.last());
    assert_eq!(normalize_zone(&RawZone::from(&zone)).unwrap(), zone);
}

#[test]
fn test_closed_two_vertex_ring_blocks_commit() {
    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    editor.select_for_edit(&b).unwrap();
    let surface = ClosedRing(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]);
    let err = editor
        .commit_edit(&b, &ZoneUpdate::new(), &surface)
        .unwrap_err();
    assert!(matches!(err, EditorError::Validation(ref v) if v.has(ZoneField::Coordinates)));
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: b });
}

#[test]
fn test_ring_edit_on_radius_zone_is_shape_mismatch() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();
    let err = editor.edit_polygon_ring(&a, Vec::new()).unwrap_err();
    assert!(matches!(err, EditorError::ShapeMismatch { .. }));
}
