//! Display colours for zones.
//!
//! Colours carry no meaning; they cycle through a fixed palette by creation order.

pub const ZONE_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Colour for the zone created when `zone_count` zones already exist.
pub fn palette_color(zone_count: usize) -> &'static str {
    ZONE_PALETTE[zone_count % ZONE_PALETTE.len()]
}
