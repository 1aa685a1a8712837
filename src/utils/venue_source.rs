// Venue sources: bounding-box search over a known list of bars

use crate::config::SEARCH;
use crate::error::{MeetingPointError, Result};
use crate::models::{Kilometers, Location, Venue};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Provides candidate venues around a point
pub trait VenueSource {
    fn venues_around(&self, center: &Location, radius_km: Kilometers) -> Result<Vec<Venue>>;
}

/// Clamps a user supplied radius to the supported search range
pub fn clamp_radius(radius_km: Kilometers) -> Kilometers {
    radius_km.clamp(SEARCH.min_radius_km, SEARCH.max_radius_km)
}

/// Well-known Paris bars used when a search finds too few results
pub fn fallback_venues() -> Vec<Venue> {
    vec![
        Venue::new(
            "Le Mary Celeste",
            Location::new(48.8576, 2.3639),
            "1 Rue Commines, 75003 Paris",
            "Cocktail bar",
        ),
        Venue::new(
            "Hemingway Bar",
            Location::new(48.8678, 2.3281),
            "15 Pl. Vendôme, 75001 Paris",
            "Luxury bar",
        ),
        Venue::new(
            "Prescription Cocktail Club",
            Location::new(48.8566, 2.3354),
            "23 Rue Mazarine, 75006 Paris",
            "Speakeasy",
        ),
        Venue::new(
            "Le Perchoir",
            Location::new(48.8654, 2.3734),
            "14 Rue Crespin du Gast, 75011 Paris",
            "Rooftop bar",
        ),
        Venue::new(
            "Little Red Door",
            Location::new(48.8576, 2.3639),
            "60 Rue Charlot, 75003 Paris",
            "Cocktail bar",
        ),
    ]
}

/// Venue source backed by an in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticVenueSource {
    venues: Vec<Venue>,
}

impl StaticVenueSource {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Loads a JSON array of venues
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MeetingPointError::io(path, e))?;
        let venues: Vec<Venue> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| MeetingPointError::json(path, e))?;

        log::info!("Loaded {} venues from {}", venues.len(), path.display());
        Ok(Self::new(venues))
    }
}

impl VenueSource for StaticVenueSource {
    /// Venues inside the square box of half-side `radius_km` around `center`,
    /// topped up with the fallback list and capped at `SEARCH.max_venues`
    fn venues_around(&self, center: &Location, radius_km: Kilometers) -> Result<Vec<Venue>> {
        let radius_deg = radius_km / SEARCH.km_per_degree;

        let mut found: Vec<Venue> = self
            .venues
            .iter()
            .filter(|venue| {
                (venue.latitude - center.latitude).abs() <= radius_deg
                    && (venue.longitude - center.longitude).abs() <= radius_deg
            })
            .cloned()
            .collect();
        log::debug!(
            "{} venues within {:.2} km of {:.4}, {:.4}",
            found.len(),
            radius_km,
            center.latitude,
            center.longitude
        );

        if found.len() < SEARCH.max_venues {
            found.extend(fallback_venues());
        }
        found.truncate(SEARCH.max_venues);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(name: &str, latitude: f64, longitude: f64) -> Venue {
        Venue::new(name, Location::new(latitude, longitude), "", "Bar")
    }

    #[test]
    fn test_clamp_radius() {
        assert_eq!(clamp_radius(0.0), 0.05);
        assert_eq!(clamp_radius(0.5), 0.5);
        assert_eq!(clamp_radius(10.0), 2.0);
    }

    #[test]
    fn test_bounding_box_filter_then_fallback() {
        let center = Location::new(48.85, 2.35);
        let source = StaticVenueSource::new(vec![
            bar("Inside", 48.852, 2.352),
            bar("Outside", 48.90, 2.35),
        ]);

        let venues = source.venues_around(&center, 0.5).unwrap();
        assert_eq!(venues[0].name, "Inside");
        assert!(venues.iter().all(|v| v.name != "Outside"));
        assert_eq!(venues.len(), 1 + fallback_venues().len());
    }

    #[test]
    fn test_results_are_capped() {
        let center = Location::new(48.85, 2.35);
        let many = (0..15)
            .map(|i| bar(&format!("Bar {i}"), 48.85 + i as f64 * 1e-4, 2.35))
            .collect();

        let venues = StaticVenueSource::new(many)
            .venues_around(&center, 0.5)
            .unwrap();
        assert_eq!(venues.len(), SEARCH.max_venues);
        assert!(venues.iter().all(|v| v.name.starts_with("Bar ")));
    }
}
