//! Distance and containment math on a spherical Earth.
//!
//! Distances use the haversine formula. Polygon containment treats
//! longitude as x and latitude as y, which is accurate for zone sizes of
//! a few tens of kilometres away from the poles and the antimeridian.

use crate::data::LatLng;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default vertex count when a circle is approximated as a polygon.
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Great-circle distance between two coordinates, in kilometres.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Great-circle distance in metres.
pub fn haversine_distance_meters(a: LatLng, b: LatLng) -> f64 {
    haversine_distance(a, b) * 1000.0
}

/// True when `point` lies within `radius_m` metres of `center` (boundary inclusive).
pub fn point_in_circle(point: LatLng, center: LatLng, radius_m: u32) -> bool {
    haversine_distance_meters(point, center) <= f64::from(radius_m)
}

/// Even-odd ray casting over `ring`, treated as closed.
///
/// A closing duplicate vertex, if present, is harmless. Rings with fewer
/// than three vertices contain nothing.
pub fn point_in_polygon(point: LatLng, ring: &[LatLng]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lng, ring[i].lat);
        let (xj, yj) = (ring[j].lng, ring[j].lat);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Approximates a circle with `steps` vertices (raised to at least 3).
///
/// The ring is returned in canonical form, without a closing duplicate.
/// The longitude offset is divided by `cos(latitude)` to account for
/// meridian convergence; this is a planar approximation and is not meant
/// for geodesically precise work.
pub fn approximate_circle_as_polygon(center: LatLng, radius_m: u32, steps: usize) -> Vec<LatLng> {
    let steps = steps.max(3);
    let angular_deg = (f64::from(radius_m) / 1000.0 / EARTH_RADIUS_KM).to_degrees();
    let lng_scale = center.lat.to_radians().cos().abs().max(1e-12);

    (0..steps)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (steps as f64);
            LatLng::new(
                center.lat + angular_deg * theta.sin(),
                center.lng + angular_deg * theta.cos() / lng_scale,
            )
        })
        .collect()
}
