//! Persisted zone records and their normalization into canonical form.
//!
//! Stored configurations carry coordinates either as `{lat, lng}` objects or
//! as bare 2-tuples. Tuple order depends on the field:
//!
//! - `center` tuples are `[lat, lng]`
//! - `coordinates` tuples are `[lng, lat]` (geographic-interchange order)
//!
//! Existing data depends on this asymmetry, so it is kept as is here and
//! nowhere else. Everything past [`normalize_zone`] is canonical.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::geo::{open_ring, LatLng};
use super::palette::palette_color;
use super::zone::{DeliveryZone, ZoneId, ZoneShape, MAX_RADIUS_M, MIN_POLYGON_VERTICES};
use crate::error::MalformedZoneError;

/// A coordinate as found in persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    /// Bare tuple; order depends on the field it appears in.
    Pair([f64; 2]),
    /// Explicit object form.
    Object { lat: f64, lng: f64 },
}

/// A zone record as read from the store configuration, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawZone {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<RawCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<RawCoordinate>>,
}

impl From<&DeliveryZone> for RawZone {
    /// Writes the legacy tuple layout that stored configurations use.
    fn from(zone: &DeliveryZone) -> Self {
        let mut raw = RawZone {
            id: zone.id.to_string(),
            name: zone.name.clone(),
            zone_type: Some(zone.zone_type().to_string()),
            delivery_fee: Some(zone.delivery_fee),
            is_active: Some(zone.is_active),
            color: Some(zone.color.clone()),
            ..Default::default()
        };
        match &zone.shape {
            ZoneShape::Radius { center, radius } => {
                raw.center = Some(RawCoordinate::Pair(center.to_lat_lng()));
                raw.radius = Some(f64::from(*radius));
            }
            ZoneShape::Polygon { coordinates } => {
                raw.coordinates = Some(
                    coordinates
                        .iter()
                        .map(|p| RawCoordinate::Pair(p.to_lng_lat()))
                        .collect(),
                );
            }
        }
        raw
    }
}

/// Outcome of loading a batch of persisted zones.
#[derive(Debug, Clone, Default)]
pub struct ZoneLoadReport {
    /// Zones that normalized cleanly, in stored order.
    pub zones: Vec<DeliveryZone>,
    /// Records that were skipped.
    pub rejected: Vec<MalformedZoneError>,
}

impl ZoneLoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Converts one persisted record into canonical form.
///
/// A record without a colour gets the first palette colour; use
/// [`normalize_zones`] to assign colours by position.
pub fn normalize_zone(raw: &RawZone) -> Result<DeliveryZone, MalformedZoneError> {
    normalize_with_fallback_color(raw, palette_color(0))
}

/// Normalizes a stored zone list, skipping and reporting malformed records.
///
/// Records with a duplicate id are rejected after the first occurrence.
pub fn normalize_zones(raws: &[RawZone]) -> ZoneLoadReport {
    let mut report = ZoneLoadReport::default();
    let mut seen = HashSet::new();

    for (index, raw) in raws.iter().enumerate() {
        match normalize_with_fallback_color(raw, palette_color(index)) {
            Ok(zone) => {
                if seen.insert(zone.id.clone()) {
                    report.zones.push(zone);
                } else {
                    let err = MalformedZoneError::new(raw.id.clone(), "duplicate zone id");
                    tracing::warn!("Skipping zone at index {}: {}", index, err);
                    report.rejected.push(err);
                }
            }
            Err(err) => {
                tracing::warn!("Skipping zone at index {}: {}", index, err);
                report.rejected.push(err);
            }
        }
    }

    tracing::debug!(
        "Loaded {} zones ({} rejected)",
        report.zones.len(),
        report.rejected.len()
    );
    report
}

fn normalize_with_fallback_color(
    raw: &RawZone,
    fallback_color: &str,
) -> Result<DeliveryZone, MalformedZoneError> {
    let malformed = |reason: &str| MalformedZoneError::new(raw.id.clone(), reason);

    if raw.id.trim().is_empty() {
        return Err(malformed("missing id"));
    }
    if raw.name.trim().is_empty() {
        return Err(malformed("missing name"));
    }

    let delivery_fee = raw.delivery_fee.unwrap_or(0.0);
    if !delivery_fee.is_finite() || delivery_fee < 0.0 {
        return Err(malformed("deliveryFee must be a non-negative number"));
    }

    let shape = match raw.zone_type.as_deref() {
        Some("radius") => normalize_radius(raw, &malformed)?,
        Some("polygon") => normalize_polygon(raw, &malformed)?,
        Some(other) => return Err(malformed(&format!("unknown zone type '{other}'"))),
        None => return Err(malformed("missing zone type")),
    };

    Ok(DeliveryZone {
        id: ZoneId::from(raw.id.as_str()),
        name: raw.name.clone(),
        delivery_fee,
        is_active: raw.is_active.unwrap_or(true),
        color: raw
            .color
            .clone()
            .unwrap_or_else(|| fallback_color.to_string()),
        shape,
    })
}

fn normalize_radius(
    raw: &RawZone,
    malformed: &dyn Fn(&str) -> MalformedZoneError,
) -> Result<ZoneShape, MalformedZoneError> {
    let center = match raw.center {
        Some(RawCoordinate::Pair(pair)) => LatLng::from_lat_lng(pair),
        Some(RawCoordinate::Object { lat, lng }) => LatLng::new(lat, lng),
        None => return Err(malformed("radius zone without center")),
    };
    if !center.is_valid() {
        return Err(malformed("center is out of range"));
    }

    let radius = raw
        .radius
        .ok_or_else(|| malformed("radius zone without radius"))?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(malformed("radius must be a non-negative number"));
    }

    let rounded = radius.round();
    let radius = if rounded > f64::from(MAX_RADIUS_M) {
        tracing::warn!(
            "Zone {} radius {} m exceeds {} m, clamping",
            raw.id,
            radius,
            MAX_RADIUS_M
        );
        MAX_RADIUS_M
    } else {
        rounded as u32
    };

    Ok(ZoneShape::Radius { center, radius })
}

fn normalize_polygon(
    raw: &RawZone,
    malformed: &dyn Fn(&str) -> MalformedZoneError,
) -> Result<ZoneShape, MalformedZoneError> {
    let raw_ring = raw
        .coordinates
        .as_ref()
        .ok_or_else(|| malformed("polygon zone without coordinates"))?;

    let coordinates = open_ring(
        raw_ring
            .iter()
            .map(|c| match *c {
                RawCoordinate::Pair(pair) => LatLng::from_lng_lat(pair),
                RawCoordinate::Object { lat, lng } => LatLng::new(lat, lng),
            })
            .collect(),
    );

    if coordinates.len() < MIN_POLYGON_VERTICES {
        return Err(malformed("polygon needs at least 3 vertices"));
    }
    if coordinates.iter().any(|p| !p.is_valid()) {
        return Err(malformed("polygon vertex is out of range"));
    }

    Ok(ZoneShape::Polygon { coordinates })
}
