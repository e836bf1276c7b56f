//! Zone data model: coordinates, canonical zones, persisted records, palette.

pub mod geo;
pub mod palette;
pub mod raw;
pub mod zone;

pub use geo::{canonical_ring, open_ring, LatLng};
pub use palette::{palette_color, ZONE_PALETTE};
pub use raw::{normalize_zone, normalize_zones, RawCoordinate, RawZone, ZoneLoadReport};
pub use zone::{
    validate_zone_fields, DeliveryZone, ZoneId, ZoneShape, ZoneType, MAX_RADIUS_M,
    MIN_POLYGON_VERTICES,
};
