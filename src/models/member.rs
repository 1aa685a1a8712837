// Member model representing a friend registered with an address

use crate::models::Location;
use serde::{Deserialize, Serialize};

/// A friend taking part in the meeting
///
/// Coordinates are optional: a member whose address could not be geocoded
/// is kept in the store but ignored by every centroid and ranking computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Display name, unique inside a store regardless of case
    pub name: String,

    /// Postal address as typed by the user
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Contact email, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    /// Creates a member without coordinates
    pub fn new<S: Into<String>, A: Into<String>>(name: S, address: A) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude: None,
            longitude: None,
            email: None,
        }
    }

    /// Creates a member already geocoded to the given location
    pub fn located<S: Into<String>, A: Into<String>>(
        name: S,
        address: A,
        location: Location,
    ) -> Self {
        Self::new(name, address).with_location(location)
    }

    /// Sets both coordinates from a location
    pub fn with_location(mut self, location: Location) -> Self {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self
    }

    /// Sets the contact email; an empty string clears it
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        let email = email.into();
        self.email = if email.trim().is_empty() {
            None
        } else {
            Some(email)
        };
        self
    }

    /// Returns the member's location when both coordinates are known
    pub fn location(&self) -> Option<Location> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location::new(latitude, longitude)),
            _ => None,
        }
    }

    /// Checks if the member can take part in centroid computations
    pub fn has_location(&self) -> bool {
        self.location().is_some()
    }

    /// Case-insensitive name comparison used by the member store
    pub fn same_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Iterates over the (name, location) pairs of members that have coordinates
pub fn located_members(members: &[Member]) -> impl Iterator<Item = (&str, Location)> + '_ {
    members
        .iter()
        .filter_map(|member| member.location().map(|loc| (member.name.as_str(), loc)))
}
