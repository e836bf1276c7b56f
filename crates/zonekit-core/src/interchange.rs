//! GeoJSON export of zones.
//!
//! GeoJSON rings are explicitly closed and use `[lng, lat]` positions.
//! Circles have no GeoJSON primitive, so radius zones are written as their
//! polygon approximation with the exact centre and radius kept in the
//! feature properties.

use serde_json::{json, Value};

use crate::data::{DeliveryZone, LatLng, ZoneShape};
use crate::geometry::approximate_circle_as_polygon;

/// Closes a canonical ring and converts it to interchange positions.
pub fn closed_lng_lat_ring(ring: &[LatLng]) -> Vec<[f64; 2]> {
    let mut out: Vec<[f64; 2]> = ring.iter().map(LatLng::to_lng_lat).collect();
    if let Some(first) = out.first().copied() {
        out.push(first);
    }
    out
}

/// Builds a GeoJSON `Feature` for one zone.
pub fn zone_to_feature(zone: &DeliveryZone, circle_steps: usize) -> Value {
    let mut properties = json!({
        "id": zone.id,
        "name": zone.name,
        "type": zone.zone_type(),
        "deliveryFee": zone.delivery_fee,
        "isActive": zone.is_active,
        "color": zone.color,
    });

    let ring = match &zone.shape {
        ZoneShape::Radius { center, radius } => {
            properties["center"] = json!(center.to_lng_lat());
            properties["radius"] = json!(radius);
            approximate_circle_as_polygon(*center, *radius, circle_steps)
        }
        ZoneShape::Polygon { coordinates } => coordinates.clone(),
    };

    json!({
        "type": "Feature",
        "id": zone.id,
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [closed_lng_lat_ring(&ring)],
        },
    })
}

/// Builds a GeoJSON `FeatureCollection`, preserving zone order.
pub fn zones_to_feature_collection(zones: &[DeliveryZone], circle_steps: usize) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": zones
            .iter()
            .map(|z| zone_to_feature(z, circle_steps))
            .collect::<Vec<_>>(),
    })
}
