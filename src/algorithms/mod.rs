pub mod geographic_centroid;
pub mod progress;
pub mod ranking;
pub mod weighted_centroid;

use crate::models::{Member, Optimization};

/// Trait for strategies choosing the group's meeting point
pub trait MeetingPointSolver {
    /// Short identifier used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Compute the meeting point for the members that have coordinates
    fn solve(&self, members: &[Member]) -> Optimization;
}
