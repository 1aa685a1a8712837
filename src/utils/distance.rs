// Distance calculation utilities on the WGS84 ellipsoid

use crate::models::{Kilometers, Location};
use geo::{GeodesicDistance, HaversineDistance, Point};

/// Calculate the geodesic distance between two locations in kilometers
pub fn geodesic_distance_km(p1: &Location, p2: &Location) -> Kilometers {
    let a: Point<f64> = (*p1).into();
    let b: Point<f64> = (*p2).into();
    a.geodesic_distance(&b) / 1000.0
}

/// Calculate the haversine (spherical) distance between two locations in kilometers
pub fn haversine_distance_km(p1: &Location, p2: &Location) -> Kilometers {
    let a: Point<f64> = (*p1).into();
    let b: Point<f64> = (*p2).into();
    a.haversine_distance(&b) / 1000.0
}
