use zonekit_core::{LatLng, ZoneId};
use zonekit_designer::{render, DrawCommand, ZoneUpdate};

use crate::common::two_zone_editor;

#[test]
fn test_render_idle_draws_every_zone_in_order() {
    let editor = two_zone_editor();
    let commands = render(&editor);
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].zone_id(), Some(&ZoneId::from("a")));
    assert_eq!(commands[1].zone_id(), Some(&ZoneId::from("b")));
    assert!(commands.iter().all(|c| !c.style().highlighted));
    assert!(commands.iter().all(|c| !c.style().editable));
}

#[test]
fn test_render_shows_draft_in_place_of_zone() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");
    editor.select_for_edit(&a).unwrap();
    editor
        .update_draft(
            &a,
            &ZoneUpdate::new()
                .center(LatLng::new(1.0, 2.0))
                .radius(3000),
        )
        .unwrap();

    let commands = render(&editor);
    match &commands[0] {
        DrawCommand::Circle {
            center,
            radius_m,
            style,
            ..
        } => {
            assert_eq!(center, &[2.0, 1.0]);
            assert_eq!(*radius_m, 3000);
            assert!(style.highlighted);
            assert!(style.editable);
            assert!(!style.dragging);
        }
        other => panic!("expected circle, got {other:?}"),
    }
    assert!(!commands[1].style().highlighted);
}

#[test]
fn test_render_flags_dragged_circle() {
    let mut editor = two_zone_editor();
    editor
        .begin_drag(&ZoneId::from("a"), LatLng::new(0.0, 0.009))
        .unwrap();
    let commands = render(&editor);
    assert!(commands[0].style().dragging);
    assert!(!commands[1].style().dragging);
}

#[test]
fn test_polygon_ring_leaves_in_lng_lat() {
    let editor = two_zone_editor();
    let commands = render(&editor);
    let DrawCommand::Polygon { ring, .. } = &commands[1] else {
        panic!("expected polygon");
    };
    assert_eq!(ring.len(), 4);
    assert_eq!(ring[1], [1.0, 0.0]);
}

#[test]
fn test_inactive_zone_is_faded() {
    let mut editor = two_zone_editor();
    editor.set_zone_active(&ZoneId::from("b"), false).unwrap();
    let commands = render(&editor);
    assert!(commands[1].style().fill_opacity < commands[0].style().fill_opacity);
}

#[test]
fn test_draw_commands_serialize_for_adapter() {
    let editor = two_zone_editor();
    let json = serde_json::to_value(render(&editor)).unwrap();
    assert_eq!(json[0]["kind"], "circle");
    assert_eq!(json[0]["radiusM"], 1000);
    assert_eq!(json[0]["zoneId"], "a");
    assert_eq!(json[1]["kind"], "polygon");
    assert_eq!(json[1]["style"]["fillOpacity"].as_f64().is_some(), true);
}
