// Location model representing geographic coordinates

use crate::models::Kilometers;
use crate::utils::distance::geodesic_distance_km;
use serde::{Deserialize, Serialize};

/// Represents a point on the earth as (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle (geodesic) distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> Kilometers {
        geodesic_distance_km(self, other)
    }

    /// Key usable for hashing: the raw bit patterns of both coordinates
    pub(crate) fn bits(&self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

impl From<Location> for geo::Point<f64> {
    fn from(location: Location) -> Self {
        // geo points are (x = longitude, y = latitude)
        geo::Point::new(location.longitude, location.latitude)
    }
}
