// Unweighted geographic centroid of a group

use crate::algorithms::MeetingPointSolver;
use crate::config::DEFAULT_CENTER;
use crate::models::{located_members, Location, Member, Optimization, TravelTimes};
use crate::utils::travel_time::{DistanceModel, TravelTimeEstimator};

/// Arithmetic mean of latitudes and longitudes of the located members.
///
/// This is a plain average, not a geodesic centroid; good enough for
/// city-scale groups. Returns `None` when no member has coordinates.
pub fn geographic_center(members: &[Member]) -> Option<Location> {
    let mut count = 0usize;
    let (mut lat_sum, mut lon_sum) = (0.0, 0.0);

    for (_, location) in located_members(members) {
        lat_sum += location.latitude;
        lon_sum += location.longitude;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(Location::new(lat_sum / count as f64, lon_sum / count as f64))
}

/// Solver returning the plain geographic centroid
pub struct GeographicCentroid<E = DistanceModel> {
    estimator: E,
    fallback: Location,
}

impl GeographicCentroid<DistanceModel> {
    pub fn new() -> Self {
        Self::with_estimator(DistanceModel::default())
    }
}

impl Default for GeographicCentroid<DistanceModel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TravelTimeEstimator> GeographicCentroid<E> {
    pub fn with_estimator(estimator: E) -> Self {
        Self {
            estimator,
            fallback: DEFAULT_CENTER,
        }
    }

    /// Replaces the center returned when nobody has coordinates
    pub fn with_fallback(mut self, fallback: Location) -> Self {
        self.fallback = fallback;
        self
    }
}

impl<E: TravelTimeEstimator> MeetingPointSolver for GeographicCentroid<E> {
    fn name(&self) -> &'static str {
        "geographic"
    }

    fn solve(&self, members: &[Member]) -> Optimization {
        let Some(center) = geographic_center(members) else {
            return Optimization::fixed(self.fallback);
        };

        let final_times: TravelTimes = located_members(members)
            .map(|(name, location)| {
                (
                    name.to_string(),
                    self.estimator.estimate_minutes(&location, &center),
                )
            })
            .collect();

        Optimization {
            center,
            final_times,
            report: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_of_two_members() {
        let members = vec![
            Member::located("Alice", "a", Location::new(48.80, 2.30)),
            Member::located("Bob", "b", Location::new(48.90, 2.40)),
        ];

        let center = geographic_center(&members).unwrap();
        assert!((center.latitude - 48.85).abs() < 1e-12);
        assert!((center.longitude - 2.35).abs() < 1e-12);
    }

    #[test]
    fn test_no_located_members() {
        let members = vec![Member::new("Alice", "somewhere")];
        assert_eq!(geographic_center(&members), None);
        assert_eq!(geographic_center(&[]), None);

        let result = GeographicCentroid::new().solve(&members);
        assert_eq!(result.center, DEFAULT_CENTER);
        assert!(result.final_times.is_empty());
    }

    #[test]
    fn test_solve_reports_times_without_report() {
        let members = vec![
            Member::located("Alice", "a", Location::new(48.80, 2.30)),
            Member::new("Bob", "unknown"),
            Member::located("Carol", "c", Location::new(48.90, 2.40)),
        ];

        let result = GeographicCentroid::new().solve(&members);
        assert_eq!(result.final_times.len(), 2);
        assert!(result.final_times.contains_key("Alice"));
        assert!(result.final_times.contains_key("Carol"));
        assert!(result.report.is_none());
    }
}
