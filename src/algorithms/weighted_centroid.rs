// Travel-time weighted centroid: one inverse-time reweighting pass

use crate::algorithms::geographic_centroid::geographic_center;
use crate::algorithms::progress::{ProgressEvent, ProgressReporter, SilentReporter};
use crate::algorithms::MeetingPointSolver;
use crate::config::{DEFAULT_CENTER, WEIGHT_FLOOR_MINUTES};
use crate::models::{
    located_members, Location, Member, Minutes, Optimization, OptimizationReport, TravelTimes,
};
use crate::utils::distance::geodesic_distance_km;
use crate::utils::travel_time::{DistanceModel, TravelTimeEstimator};

/// Weight of a member whose travel time to the initial centroid is `minutes`.
///
/// Never exceeds `1 / WEIGHT_FLOOR_MINUTES`.
pub fn member_weight(minutes: Minutes) -> f64 {
    1.0 / minutes.max(WEIGHT_FLOOR_MINUTES)
}

/// Weighted centroid solver
///
/// Starts from the geographic centroid, weights every member by the inverse
/// of its estimated travel time to it and takes the weighted mean of the
/// coordinates. This is a single corrective step, not a fixed-point
/// iteration: the result is not guaranteed to lower the average travel time.
pub struct WeightedCentroid<E = DistanceModel> {
    estimator: E,
    fallback: Location,
}

impl WeightedCentroid<DistanceModel> {
    /// Creates a solver using the tiered distance model
    pub fn new() -> Self {
        Self::with_estimator(DistanceModel::default())
    }
}

impl Default for WeightedCentroid<DistanceModel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TravelTimeEstimator> WeightedCentroid<E> {
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

    /// Runs the optimization, sending each step to `reporter`
    pub fn solve_with_progress(
        &self,
        members: &[Member],
        reporter: &dyn ProgressReporter,
    ) -> Optimization {
        let located: Vec<(&str, Location)> = located_members(members).collect();

        let initial_center = match located.as_slice() {
            [] => return Optimization::fixed(self.fallback),
            [(_, only)] => return Optimization::fixed(*only),
            _ => match geographic_center(members) {
                Some(center) => center,
                None => return Optimization::fixed(self.fallback),
            },
        };
        reporter.report(ProgressEvent::InitialCenter(initial_center));

        // Step 2: travel times to the initial centroid
        let initial: Vec<Minutes> = located
            .iter()
            .map(|&(name, location)| {
                let minutes = self.estimator.estimate_minutes(&location, &initial_center);
                reporter.report(ProgressEvent::InitialTime { name, minutes });
                minutes
            })
            .collect();
        let avg_initial_time = mean(&initial);
        reporter.report(ProgressEvent::AverageInitialTime(avg_initial_time));

        // Steps 3-4: inverse-time weights and weighted centroid
        let mut total_weight = 0.0;
        let (mut lat_sum, mut lon_sum) = (0.0, 0.0);
        for (&(name, location), &minutes) in located.iter().zip(&initial) {
            let weight = member_weight(minutes);
            reporter.report(ProgressEvent::Weight {
                name,
                weight,
                minutes,
            });

            total_weight += weight;
            lat_sum += location.latitude * weight;
            lon_sum += location.longitude * weight;
        }

        let center = if total_weight > 0.0 {
            Location::new(lat_sum / total_weight, lon_sum / total_weight)
        } else {
            initial_center
        };

        let displacement_km = geodesic_distance_km(&initial_center, &center);
        reporter.report(ProgressEvent::WeightedCenter {
            center,
            displacement_km,
        });

        // Step 5: travel times to the weighted centroid
        let finals: Vec<Minutes> = located
            .iter()
            .zip(&initial)
            .map(|(&(name, location), &initial_minutes)| {
                let minutes = self.estimator.estimate_minutes(&location, &center);
                reporter.report(ProgressEvent::FinalTime {
                    name,
                    minutes,
                    initial_minutes,
                });
                minutes
            })
            .collect();
        let avg_final_time = mean(&finals);

        let report = OptimizationReport {
            initial_center,
            initial_times: times_by_name(&located, &initial),
            avg_initial_time,
            avg_final_time,
            time_improvement: avg_initial_time - avg_final_time,
            displacement_km,
        };
        reporter.report(ProgressEvent::Finished(&report));

        Optimization {
            center,
            final_times: times_by_name(&located, &finals),
            report: Some(report),
        }
    }
}

impl<E: TravelTimeEstimator> MeetingPointSolver for WeightedCentroid<E> {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn solve(&self, members: &[Member]) -> Optimization {
        self.solve_with_progress(members, &SilentReporter)
    }
}

fn mean(values: &[Minutes]) -> Minutes {
    values.iter().sum::<Minutes>() / values.len() as f64
}

fn times_by_name(located: &[(&str, Location)], minutes: &[Minutes]) -> TravelTimes {
    located
        .iter()
        .zip(minutes)
        .map(|((name, _), minutes)| (name.to_string(), *minutes))
        .collect()
}
