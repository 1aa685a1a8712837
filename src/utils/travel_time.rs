// Travel-time estimation: tiered distance model, provider fallback and caching

use crate::config::{TransitModel, TransitTier, PARIS_TRANSIT};
use crate::error::RouteError;
use crate::models::{Kilometers, Location, Minutes};
use crate::utils::distance::geodesic_distance_km;
use std::collections::HashMap;
use std::sync::Mutex;

/// Estimates the travel time between two locations
///
/// Implementations must be total: any failure has to be absorbed and turned
/// into an estimate, never surfaced to the solver.
pub trait TravelTimeEstimator: Sync {
    fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes;
}

impl<T: TravelTimeEstimator + ?Sized> TravelTimeEstimator for &T {
    fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes {
        (**self).estimate_minutes(from, to)
    }
}

/// Estimates the travel time in minutes for a distance using the default model
pub fn estimate_time(distance_km: Kilometers) -> Minutes {
    PARIS_TRANSIT.estimate(distance_km)
}

impl TransitTier {
    fn minutes_for(&self, distance_km: Kilometers) -> Minutes {
        (distance_km / self.speed_kmh) * 60.0 + self.wait_minutes + self.walk_minutes
    }
}

impl TransitModel {
    /// Converts a distance into minutes. Tier bounds are half-open:
    /// walking below `walking_limit_km`, urban below `urban_limit_km`,
    /// long haul from `urban_limit_km` on.
    pub fn estimate(&self, distance_km: Kilometers) -> Minutes {
        if distance_km < self.walking_limit_km {
            distance_km * self.walking_minutes_per_km
        } else if distance_km < self.urban_limit_km {
            self.urban.minutes_for(distance_km)
        } else {
            self.long_haul.minutes_for(distance_km)
        }
    }

    /// Conservative estimate used when a routing provider cannot answer
    pub fn fallback_estimate(&self, distance_km: Kilometers) -> Minutes {
        (distance_km / self.fallback_speed_kmh) * 60.0
    }
}

/// Closed-form estimator: geodesic distance fed into a [`TransitModel`]
#[derive(Debug, Clone, Copy)]
pub struct DistanceModel {
    pub model: TransitModel,
}

impl DistanceModel {
    pub fn new(model: TransitModel) -> Self {
        Self { model }
    }
}

impl Default for DistanceModel {
    fn default() -> Self {
        Self::new(PARIS_TRANSIT)
    }
}

impl TravelTimeEstimator for DistanceModel {
    fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes {
        self.model.estimate(geodesic_distance_km(from, to))
    }
}

/// A routing service that may fail (network, quota, missing route)
pub trait RouteProvider: Sync {
    fn route_minutes(&self, from: &Location, to: &Location) -> Result<Minutes, RouteError>;
}

/// Wraps a [`RouteProvider`] and replaces its failures by a
/// distance-proportional estimate
pub struct FallbackEstimator<P> {
    provider: P,
    model: TransitModel,
}

impl<P: RouteProvider> FallbackEstimator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_model(provider, PARIS_TRANSIT)
    }

    pub fn with_model(provider: P, model: TransitModel) -> Self {
        Self { provider, model }
    }
}

impl<P: RouteProvider> TravelTimeEstimator for FallbackEstimator<P> {
    fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes {
        match self.provider.route_minutes(from, to) {
            Ok(minutes) => minutes,
            Err(e) => {
                let minutes = self.model.fallback_estimate(geodesic_distance_km(from, to));
                log::warn!("Travel time lookup failed ({e}), using {minutes:.1} min estimate");
                minutes
            }
        }
    }
}

type PairKey = ((u64, u64), (u64, u64));

/// Memoizes another estimator per exact (origin, destination) pair
pub struct CachedEstimator<E> {
    inner: E,
    cache: Mutex<HashMap<PairKey, Minutes>>,
}

impl<E: TravelTimeEstimator> CachedEstimator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct pairs estimated so far
    pub fn cached_pairs(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl<E: TravelTimeEstimator> TravelTimeEstimator for CachedEstimator<E> {
    fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes {
        let key = (from.bits(), to.bits());
        if let Ok(cache) = self.cache.lock() {
            if let Some(minutes) = cache.get(&key) {
                return *minutes;
            }
        }

        // Computed outside the lock so slow providers don't serialize callers
        let minutes = self.inner.estimate_minutes(from, to);
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, minutes);
        }
        minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_walking_tier() {
        assert_close(estimate_time(0.0), 0.0);
        assert_close(estimate_time(0.3), 3.6);
    }

    #[test]
    fn test_walking_tier_is_exactly_twelve_minutes_per_km() {
        for step in 0..600 {
            let d = step as f64 * 0.001;
            assert_eq!(estimate_time(d), d * 12.0, "at {d}");
        }
    }

    #[test]
    fn test_urban_tier_starts_at_boundary() {
        assert_close(estimate_time(0.6), 11.8);
        assert_close(estimate_time(10.0), 40.0);
        assert_close(estimate_time(14.99), 14.99 * 3.0 + 10.0);
    }

    #[test]
    fn test_long_haul_tier() {
        assert_close(estimate_time(15.0), (15.0 / 35.0) * 60.0 + 16.0);
        assert_close(estimate_time(20.0), (20.0 / 35.0) * 60.0 + 16.0);
        assert!((estimate_time(20.0) - 50.29).abs() < 0.01);
    }

    #[test]
    fn test_monotonic_within_tiers() {
        let tiers = [(0.0, 0.6), (0.6, 15.0), (15.0, 100.0)];
        for (start, end) in tiers {
            let mut previous = estimate_time(start);
            let mut d = start;
            while d < end {
                let current = estimate_time(d);
                assert!(current >= previous, "not monotonic at {d}");
                previous = current;
                d += 0.05;
            }
        }
    }

    struct FailingProvider(RouteError);

    impl RouteProvider for FailingProvider {
        fn route_minutes(&self, _: &Location, _: &Location) -> Result<Minutes, RouteError> {
            Err(self.0.clone())
        }
    }

    struct FixedProvider(Minutes);

    impl RouteProvider for FixedProvider {
        fn route_minutes(&self, _: &Location, _: &Location) -> Result<Minutes, RouteError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_fallback_on_provider_failure() {
        let from = Location::new(48.80, 2.30);
        let to = Location::new(48.90, 2.40);
        let distance = geodesic_distance_km(&from, &to);

        for error in [
            RouteError::Timeout,
            RouteError::QuotaExceeded,
            RouteError::NoRoute,
            RouteError::Provider("503".to_string()),
        ] {
            let estimator = FallbackEstimator::new(FailingProvider(error));
            assert_close(estimator.estimate_minutes(&from, &to), distance * 4.0);
        }
    }

    #[test]
    fn test_fallback_passes_through_success() {
        let estimator = FallbackEstimator::new(FixedProvider(42.0));
        let loc = Location::new(48.85, 2.35);
        assert_eq!(estimator.estimate_minutes(&loc, &loc), 42.0);
    }

    struct CountingEstimator(AtomicUsize);

    impl TravelTimeEstimator for CountingEstimator {
        fn estimate_minutes(&self, from: &Location, to: &Location) -> Minutes {
            self.0.fetch_add(1, Ordering::SeqCst);
            DistanceModel::default().estimate_minutes(from, to)
        }
    }

    #[test]
    fn test_cache_calls_inner_once_per_pair() {
        let cached = CachedEstimator::new(CountingEstimator(AtomicUsize::new(0)));
        let a = Location::new(48.80, 2.30);
        let b = Location::new(48.90, 2.40);

        let first = cached.estimate_minutes(&a, &b);
        let second = cached.estimate_minutes(&a, &b);
        cached.estimate_minutes(&b, &a);

        assert_eq!(first, second);
        assert_eq!(cached.inner.0.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cached_pairs(), 2);
    }
}
