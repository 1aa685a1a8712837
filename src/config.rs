//! Compile-time configuration for the meeting point finder.

use crate::models::{Kilometers, Location, Minutes};

/// Center used when no member has usable coordinates (Paris, Hôtel de Ville area)
pub const DEFAULT_CENTER: Location = Location {
    latitude: 48.8566,
    longitude: 2.3522,
};

/// Lower bound on the travel time used to weight a member.
/// Keeps `1 / time` finite and caps a single member's pull at 0.2.
pub const WEIGHT_FLOOR_MINUTES: Minutes = 5.0;

/// One transport regime of the tiered travel-time model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitTier {
    /// Average speed while moving
    pub speed_kmh: f64,
    /// Average wait at the stop
    pub wait_minutes: Minutes,
    /// Walk to and from stations
    pub walk_minutes: Minutes,
}

/// Parameters of the three-tier travel-time model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitModel {
    /// Below this distance people walk
    pub walking_limit_km: Kilometers,
    /// Walking pace, 12 min/km is about 5 km/h
    pub walking_minutes_per_km: Minutes,
    /// From `walking_limit_km` up to this distance: urban transit
    pub urban_limit_km: Kilometers,
    pub urban: TransitTier,
    /// At and beyond `urban_limit_km`: regional trains
    pub long_haul: TransitTier,
    /// km/h assumed when a routing provider fails
    pub fallback_speed_kmh: f64,
}

pub const PARIS_TRANSIT: TransitModel = TransitModel {
    walking_limit_km: 0.6,
    walking_minutes_per_km: 12.0,
    urban_limit_km: 15.0,
    urban: TransitTier {
        speed_kmh: 20.0,
        wait_minutes: 5.0,
        walk_minutes: 5.0,
    },
    long_haul: TransitTier {
        speed_kmh: 35.0,
        wait_minutes: 8.0,
        walk_minutes: 8.0,
    },
    fallback_speed_kmh: 15.0,
};

/// Configuration for the member store
pub struct StoreConfig {
    /// Default path of the JSON member file
    pub path: &'static str,
}

pub const STORE: StoreConfig = StoreConfig {
    path: "data/friends.json",
};

/// Configuration for venue search around the meeting point
pub struct SearchConfig {
    pub default_radius_km: Kilometers,
    pub min_radius_km: Kilometers,
    pub max_radius_km: Kilometers,
    /// Kilometers per degree used to turn the radius into a bounding box
    pub km_per_degree: f64,
    /// Maximum number of venues returned by a search
    pub max_venues: usize,
}

pub const SEARCH: SearchConfig = SearchConfig {
    default_radius_km: 0.5,
    min_radius_km: 0.05,
    max_radius_km: 2.0,
    km_per_degree: 111.0,
    max_venues: 10,
};
