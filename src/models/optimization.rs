// Result models produced by meeting point solvers

use crate::models::{Kilometers, Location, Minutes};
use std::collections::BTreeMap;

/// Travel time per member name
pub type TravelTimes = BTreeMap<String, Minutes>;

/// Diagnostics comparing the initial geographic centroid with the weighted one
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    /// Unweighted centroid the reweighting started from
    pub initial_center: Location,

    /// Travel time of every located member to the initial centroid
    pub initial_times: TravelTimes,

    pub avg_initial_time: Minutes,
    pub avg_final_time: Minutes,

    /// `avg_initial_time - avg_final_time`; negative when reweighting made things worse
    pub time_improvement: Minutes,

    /// Distance between the initial and the weighted centroid, in kilometers
    pub displacement_km: Kilometers,
}

impl OptimizationReport {
    /// Whether the weighted centroid reduced the average travel time
    pub fn improved(&self) -> bool {
        self.time_improvement > 0.0
    }
}

/// Outcome of a solver call: the chosen center, the travel times to it and
/// the optional diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub center: Location,

    /// Travel time of every located member to `center`
    pub final_times: TravelTimes,

    /// Present only when an actual reweighting took place
    pub report: Option<OptimizationReport>,
}

impl Optimization {
    /// A result with no travel times and no report (degenerate input)
    pub fn fixed(center: Location) -> Self {
        Self {
            center,
            final_times: TravelTimes::new(),
            report: None,
        }
    }
}
