// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::geographic_centroid::GeographicCentroid;
pub use algorithms::weighted_centroid::WeightedCentroid;
pub use algorithms::MeetingPointSolver;
pub use error::{MeetingPointError, RouteError};
pub use models::{Location, Member, Optimization, OptimizationReport, RankedVenue, Venue};
pub use utils::travel_time::{estimate_time, TravelTimeEstimator};
