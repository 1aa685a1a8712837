// Ranking of candidate venues by the group's average distance or travel time

use crate::models::{located_members, Kilometers, Location, Member, Minutes, RankedVenue, Venue};
use crate::utils::distance::geodesic_distance_km;
use crate::utils::travel_time::TravelTimeEstimator;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Criterion used to sort venues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankBy {
    #[default]
    Distance,
    TravelTime,
}

/// Mean geodesic distance from every located member to `target`.
/// Infinite when no member has coordinates.
pub fn average_distance_km(target: &Location, members: &[Member]) -> Kilometers {
    mean_or_infinity(located_members(members).map(|(_, loc)| geodesic_distance_km(target, &loc)))
}

/// Mean estimated travel time from every located member to `target`.
/// Infinite when no member has coordinates.
pub fn average_travel_time<E: TravelTimeEstimator + ?Sized>(
    target: &Location,
    members: &[Member],
    estimator: &E,
) -> Minutes {
    mean_or_infinity(
        located_members(members).map(|(_, loc)| estimator.estimate_minutes(&loc, target)),
    )
}

/// Distance from a venue to the chosen meeting point
pub fn distance_to_center_km(venue: &Venue, center: &Location) -> Kilometers {
    geodesic_distance_km(&venue.location(), center)
}

/// Computes both averages for each venue and sorts ascending by `order`.
///
/// Venues are scored in parallel; equal scores keep their input order.
pub fn rank_venues<E: TravelTimeEstimator + ?Sized>(
    venues: Vec<Venue>,
    members: &[Member],
    estimator: &E,
    order: RankBy,
) -> Vec<RankedVenue> {
    let mut ranked: Vec<RankedVenue> = venues
        .into_par_iter()
        .map(|venue| {
            let location = venue.location();
            RankedVenue {
                avg_distance_km: average_distance_km(&location, members),
                avg_travel_time: average_travel_time(&location, members, estimator),
                venue,
            }
        })
        .collect();

    ranked.sort_by(|a, b| match order {
        RankBy::Distance => compare(a.avg_distance_km, b.avg_distance_km),
        RankBy::TravelTime => compare(a.avg_travel_time, b.avg_travel_time),
    });
    ranked
}

// NaN sorts last
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

fn mean_or_infinity(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::INFINITY
    } else {
        sum / count as f64
    }
}
