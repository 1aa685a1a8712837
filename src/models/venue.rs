// Venue models for candidate bars and their ranking

use crate::models::{Kilometers, Location, Minutes};
use serde::{Deserialize, Serialize};

/// A bar or pub returned by a venue source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Approximate postal address
    #[serde(default)]
    pub address: String,

    /// Venue category, e.g. "Bar", "Pub" or "Speakeasy"
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "Bar".to_string()
}

impl Venue {
    /// Creates a new venue with the given name, coordinates, address and category
    pub fn new<N, A, K>(name: N, location: Location, address: A, kind: K) -> Self
    where
        N: Into<String>,
        A: Into<String>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            latitude: location.latitude,
            longitude: location.longitude,
            address: address.into(),
            kind: kind.into(),
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// A venue together with the group's average distance and travel time to it
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVenue {
    pub venue: Venue,

    /// Mean geodesic distance from every located member
    pub avg_distance_km: Kilometers,

    /// Mean estimated travel time from every located member
    pub avg_travel_time: Minutes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_defaults_from_json() {
        let venue: Venue =
            serde_json::from_str(r#"{"name": "Le Perchoir", "latitude": 48.8654, "longitude": 2.3734}"#)
                .unwrap();
        assert_eq!(venue.kind, "Bar");
        assert_eq!(venue.address, "");
        assert_eq!(venue.location(), Location::new(48.8654, 2.3734));
    }
}
