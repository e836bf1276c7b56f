//! # ZoneKit Core
//!
//! Core types and services for storefront delivery zones.
//! Provides the zone data model, normalization of persisted records,
//! geometry on a spherical Earth, and checkout-time zone resolution.

pub mod data;
pub mod error;
pub mod geometry;
pub mod interchange;
pub mod resolution;
pub mod store;

pub use data::{
    canonical_ring, normalize_zone, normalize_zones, open_ring, palette_color,
    validate_zone_fields, DeliveryZone, LatLng, RawCoordinate, RawZone, ZoneId, ZoneLoadReport,
    ZoneShape, ZoneType, MAX_RADIUS_M, MIN_POLYGON_VERTICES, ZONE_PALETTE,
};

pub use error::{EditorError, MalformedZoneError, PersistenceError, ValidationError, ZoneField};

pub use geometry::{
    approximate_circle_as_polygon, haversine_distance, haversine_distance_meters,
    point_in_circle, point_in_polygon, DEFAULT_CIRCLE_STEPS, EARTH_RADIUS_KM,
};

pub use interchange::{zone_to_feature, zones_to_feature_collection};
pub use resolution::{find_zone, resolve_zone, DeliveryPolicy, DeliveryQuote, ZoneResolution};
pub use store::{InMemoryZoneStore, ZoneConfigStore};
