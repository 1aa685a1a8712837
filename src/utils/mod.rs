// Utilities: geodesy, travel-time estimation and I/O collaborators

pub mod distance;
pub mod member_store;
pub mod travel_time;
pub mod venue_source;
