use zonekit_core::{DeliveryZone, LatLng, ZoneId, ZoneShape};
use zonekit_designer::ZoneEditor;

pub fn circle(id: &str, center: LatLng, radius: u32, fee: f64) -> DeliveryZone {
    DeliveryZone {
        id: ZoneId::from(id),
        name: format!("Zone {id}"),
        delivery_fee: fee,
        is_active: true,
        color: "#3b82f6".to_string(),
        shape: ZoneShape::Radius { center, radius },
    }
}

pub fn unit_square(id: &str) -> DeliveryZone {
    DeliveryZone {
        id: ZoneId::from(id),
        name: format!("Zone {id}"),
        delivery_fee: 3.0,
        is_active: true,
        color: "#10b981".to_string(),
        shape: ZoneShape::Polygon {
            coordinates: vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 1.0),
                LatLng::new(1.0, 1.0),
                LatLng::new(1.0, 0.0),
            ],
        },
    }
}

/// Editor with a 1 km circle `a` at the origin and the unit square `b`.
pub fn two_zone_editor() -> ZoneEditor {
    ZoneEditor::with_zones(
        LatLng::new(0.0, 0.0),
        vec![
            circle("a", LatLng::new(0.0, 0.0), 1000, 5.0),
            unit_square("b"),
        ],
    )
}
