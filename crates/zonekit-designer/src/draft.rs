//! Uncommitted zone edits.

use serde::Serialize;
use zonekit_core::{
    validate_zone_fields, DeliveryZone, LatLng, ValidationError, ZoneId, ZoneShape, ZoneType,
};

/// An in-memory zone edit that has not been committed yet.
///
/// New zones have no id until they are committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDraft {
    pub id: Option<ZoneId>,
    pub name: String,
    /// `None` while the fee field is empty.
    pub delivery_fee: Option<f64>,
    pub is_active: bool,
    pub shape: ZoneShape,
}

impl ZoneDraft {
    /// Blank draft for a new zone of the given shape.
    pub fn new(shape: ZoneShape) -> Self {
        Self {
            id: None,
            name: String::new(),
            delivery_fee: None,
            is_active: true,
            shape,
        }
    }

    /// Draft seeded from a committed zone.
    pub fn from_zone(zone: &DeliveryZone) -> Self {
        Self {
            id: Some(zone.id.clone()),
            name: zone.name.clone(),
            delivery_fee: Some(zone.delivery_fee),
            is_active: zone.is_active,
            shape: zone.shape.clone(),
        }
    }

    pub fn zone_type(&self) -> ZoneType {
        self.shape.zone_type()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_delivery_fee(mut self, fee: f64) -> Self {
        self.delivery_fee = Some(fee);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn with_shape(mut self, shape: ZoneShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_zone_fields(&self.name, self.delivery_fee, &self.shape)
    }

    /// Builds the committed zone. The caller validates first.
    pub(crate) fn into_zone(self, id: ZoneId, color: String) -> DeliveryZone {
        DeliveryZone {
            id,
            name: self.name.trim().to_string(),
            delivery_fee: self.delivery_fee.unwrap_or_default(),
            is_active: self.is_active,
            color,
            shape: self.shape,
        }
    }

    pub(crate) fn apply(&mut self, update: &ZoneUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(fee) = update.delivery_fee {
            self.delivery_fee = Some(fee);
        }
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        if let ZoneShape::Radius { center, radius } = &mut self.shape {
            if let Some(c) = update.center {
                *center = c;
            }
            if let Some(r) = update.radius {
                *radius = r;
            }
        }
    }
}

/// Form field changes for an existing zone.
///
/// Unset fields keep their current value. `center` and `radius` only apply
/// to radius zones; polygon vertices come from the map surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub delivery_fee: Option<f64>,
    pub is_active: Option<bool>,
    pub center: Option<LatLng>,
    pub radius: Option<u32>,
}

impl ZoneUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn delivery_fee(mut self, fee: f64) -> Self {
        self.delivery_fee = Some(fee);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    pub fn center(mut self, center: LatLng) -> Self {
        self.center = Some(center);
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }
}
