use zonekit_core::{LatLng, ZoneId, ZoneShape};
use zonekit_designer::{DragUpdate, InteractionState, MapEvent, MapEventOutcome, PointerTarget};

use crate::common::two_zone_editor;

#[test]
fn test_full_drag_gesture() {
    let mut editor = two_zone_editor();
    let a = ZoneId::from("a");

    let started = editor
        .handle_map_event(MapEvent::PointerDown {
            target: Some(PointerTarget::Edge(a.clone())),
            at: LatLng::new(0.0, 0.009),
        })
        .unwrap();
    assert_eq!(started, MapEventOutcome::DragStarted { zone_id: a.clone() });

    let moved = editor
        .handle_map_event(MapEvent::PointerMove {
            at: LatLng::new(0.0, 0.01),
        })
        .unwrap();
    assert_eq!(
        moved,
        MapEventOutcome::DragUpdated(DragUpdate {
            radius: 1112,
            clamped: false
        })
    );

    // The release position is applied before the drag ends.
    let ended = editor
        .handle_map_event(MapEvent::PointerUp {
            at: LatLng::new(0.0, 0.02),
        })
        .unwrap();
    assert_eq!(ended, MapEventOutcome::DragEnded { radius: 2224 });
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: a.clone() });
    assert!(matches!(
        editor.draft().unwrap().shape,
        ZoneShape::Radius { radius: 2224, .. }
    ));
}

#[test]
fn test_body_click_selects() {
    let mut editor = two_zone_editor();
    let b = ZoneId::from("b");
    let outcome = editor
        .handle_map_event(MapEvent::PointerDown {
            target: Some(PointerTarget::Body(b.clone())),
            at: LatLng::new(0.5, 0.5),
        })
        .unwrap();
    assert_eq!(outcome, MapEventOutcome::Selected { zone_id: b.clone() });
    assert_eq!(editor.state(), &InteractionState::Editing { zone_id: b });
}

#[test]
fn test_events_deserialize_from_adapter_json() {
    let event: MapEvent = serde_json::from_str(
        r#"{"type":"pointerDown","target":{"edge":"a"},"at":{"lat":0.0,"lng":0.009}}"#,
    )
    .unwrap();
    assert_eq!(
        event,
        MapEvent::PointerDown {
            target: Some(PointerTarget::Edge(ZoneId::from("a"))),
            at: LatLng::new(0.0, 0.009),
        }
    );

    let event: MapEvent = serde_json::from_str(
        r#"{"type":"vertexEdited","zoneId":"b","ring":[[0.0,0.0],[1.0,0.0],[1.0,1.0]]}"#,
    )
    .unwrap();
    assert!(matches!(event, MapEvent::VertexEdited { ref ring, .. } if ring.len() == 3));
}
