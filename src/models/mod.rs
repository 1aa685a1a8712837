// Models module - exports all model types

mod location;
mod member;
mod optimization;
mod venue;

// Re-export model types
pub use self::location::Location;
pub use self::member::{located_members, Member};
pub use self::optimization::{Optimization, OptimizationReport, TravelTimes};
pub use self::venue::{RankedVenue, Venue};

// Common type aliases for improved code readability
pub type Minutes = f64;
pub type Kilometers = f64;
