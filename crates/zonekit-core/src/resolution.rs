//! Checkout-time zone resolution.
//!
//! Resolution is a pure function of a coordinate and the configured zone
//! list. Only active zones are considered and the first one in stored order
//! that contains the point wins; store owners list zones in priority order.

use serde::{Deserialize, Serialize};

use crate::data::{DeliveryZone, LatLng, ZoneId};

/// Result of evaluating a coordinate against a zone list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResolution {
    /// The matching zone, if any.
    pub zone: Option<DeliveryZone>,
    /// Fee of the matching zone, 0 when outside every zone.
    pub fee: f64,
    pub within_any_zone: bool,
}

impl ZoneResolution {
    fn outside() -> Self {
        Self {
            zone: None,
            fee: 0.0,
            within_any_zone: false,
        }
    }
}

/// Returns the first active zone containing `point`.
pub fn find_zone(point: LatLng, zones: &[DeliveryZone]) -> Option<&DeliveryZone> {
    zones
        .iter()
        .filter(|zone| zone.is_active)
        .find(|zone| zone.contains(point))
}

/// Resolves `point` against `zones` (first match wins).
pub fn resolve_zone(point: LatLng, zones: &[DeliveryZone]) -> ZoneResolution {
    match find_zone(point, zones) {
        Some(zone) => {
            tracing::debug!("Point {} resolved to zone {}", point, zone.id);
            ZoneResolution {
                zone: Some(zone.clone()),
                fee: zone.delivery_fee,
                within_any_zone: true,
            }
        }
        None => {
            tracing::debug!("Point {} is outside all zones", point);
            ZoneResolution::outside()
        }
    }
}

/// Store-level rules applied when a point falls outside every zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    /// Flat fee used when zones do not decide the fee.
    pub default_delivery_fee: f64,
    /// Accept orders outside every zone at the default fee.
    pub accept_orders_outside_zones: bool,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            default_delivery_fee: 0.0,
            accept_orders_outside_zones: false,
        }
    }
}

/// What checkout should do with an address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeliveryQuote {
    /// The address falls in a zone.
    #[serde(rename_all = "camelCase")]
    InZone {
        zone_id: ZoneId,
        zone_name: String,
        fee: f64,
    },
    /// No active zones are configured, so delivery is unrestricted.
    Unrestricted { fee: f64 },
    /// Outside every zone, accepted at the default fee.
    OutsideZones { fee: f64 },
    /// Outside every zone and the store does not accept such orders.
    Undeliverable,
}

impl DeliveryQuote {
    pub fn is_deliverable(&self) -> bool {
        !matches!(self, Self::Undeliverable)
    }

    pub fn fee(&self) -> Option<f64> {
        match self {
            Self::InZone { fee, .. } | Self::Unrestricted { fee } | Self::OutsideZones { fee } => {
                Some(*fee)
            }
            Self::Undeliverable => None,
        }
    }
}

impl DeliveryPolicy {
    /// Quotes delivery for `point`.
    ///
    /// A zone list with no active zones means no restriction is configured,
    /// which is different from a zero-radius zone at the store.
    pub fn quote(&self, point: LatLng, zones: &[DeliveryZone]) -> DeliveryQuote {
        if !zones.iter().any(|z| z.is_active) {
            return DeliveryQuote::Unrestricted {
                fee: self.default_delivery_fee,
            };
        }

        if let Some(zone) = find_zone(point, zones) {
            return DeliveryQuote::InZone {
                zone_id: zone.id.clone(),
                zone_name: zone.name.clone(),
                fee: zone.delivery_fee,
            };
        }

        if self.accept_orders_outside_zones {
            DeliveryQuote::OutsideZones {
                fee: self.default_delivery_fee,
            }
        } else {
            DeliveryQuote::Undeliverable
        }
    }
}
