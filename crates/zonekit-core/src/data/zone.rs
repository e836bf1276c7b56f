//! Delivery zone model in canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geo::LatLng;
use crate::error::{ValidationError, ZoneField};
use crate::geometry::{point_in_circle, point_in_polygon};

/// Largest radius a circular zone may have, in metres.
pub const MAX_RADIUS_M: u32 = 50_000;

/// Fewest vertices a polygon zone may have.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Client-generated zone identifier, stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub String);

impl ZoneId {
    /// Generates a fresh identifier for a newly created zone.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Shape variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Radius,
    Polygon,
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radius => write!(f, "radius"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

/// Geometry of a zone, discriminated by its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ZoneShape {
    /// Circle around `center`; `radius` in metres.
    Radius { center: LatLng, radius: u32 },
    /// Implicitly closed ring, stored without the closing duplicate.
    Polygon { coordinates: Vec<LatLng> },
}

impl ZoneShape {
    pub fn zone_type(&self) -> ZoneType {
        match self {
            Self::Radius { .. } => ZoneType::Radius,
            Self::Polygon { .. } => ZoneType::Polygon,
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        match self {
            Self::Radius { center, radius } => point_in_circle(point, *center, *radius),
            Self::Polygon { coordinates } => point_in_polygon(point, coordinates),
        }
    }
}

/// A named geographic area with an associated delivery fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: ZoneId,
    pub name: String,
    pub delivery_fee: f64,
    pub is_active: bool,
    pub color: String,
    #[serde(flatten)]
    pub shape: ZoneShape,
}

impl DeliveryZone {
    pub fn zone_type(&self) -> ZoneType {
        self.shape.zone_type()
    }

    /// Tests the point against the zone geometry, ignoring `is_active`.
    pub fn contains(&self, point: LatLng) -> bool {
        self.shape.contains(point)
    }
}

/// Checks the user-editable fields of a zone.
///
/// Every failing field is reported, not just the first one.
pub fn validate_zone_fields(
    name: &str,
    delivery_fee: Option<f64>,
    shape: &ZoneShape,
) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    if name.trim().is_empty() {
        fields.push(ZoneField::Name);
    }

    match delivery_fee {
        Some(fee) if fee.is_finite() && fee >= 0.0 => {}
        _ => fields.push(ZoneField::DeliveryFee),
    }

    match shape {
        ZoneShape::Radius { center, radius } => {
            if *radius > MAX_RADIUS_M || !center.is_valid() {
                fields.push(ZoneField::Radius);
            }
        }
        ZoneShape::Polygon { coordinates } => {
            if coordinates.len() < MIN_POLYGON_VERTICES
                || coordinates.iter().any(|p| !p.is_valid())
            {
                fields.push(ZoneField::Coordinates);
            }
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}
