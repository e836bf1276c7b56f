//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A coordinate in canonical (latitude, longitude) order, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Reads a `[lat, lng]` tuple.
    pub fn from_lat_lng(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// Reads a `[lng, lat]` tuple in geographic-interchange order.
    ///
    /// Together with [`LatLng::to_lng_lat`] this is the only place the axis
    /// order is swapped. Map surfaces, interchange export and legacy polygon
    /// records all go through these two functions.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    /// Writes a `[lng, lat]` tuple in geographic-interchange order.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Writes a `[lat, lng]` tuple.
    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    /// Both components are finite and inside the valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Converts a `[lng, lat]` ring from a map surface or interchange document
/// into canonical vertices without the closing duplicate.
pub fn canonical_ring<I>(pairs: I) -> Vec<LatLng>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    open_ring(pairs.into_iter().map(LatLng::from_lng_lat).collect())
}

/// Drops a last vertex that repeats the first.
pub fn open_ring(mut ring: Vec<LatLng>) -> Vec<LatLng> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}
