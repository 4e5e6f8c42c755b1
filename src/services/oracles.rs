// SPDX-License-Identifier: MIT

//! External oracle interfaces and the simulated implementations used by the
//! demo binary.
//!
//! The core only ever talks to the GPS and scoring services through these
//! traits; production deployments plug in real network-backed clients, tests
//! plug in scripted mocks.

use std::time::Duration;

use rand::Rng;
use uuid::Uuid;

use crate::models::{Attraction, Coordinate};

/// Source of raw GPS fixes and the attraction catalog.
///
/// Calls may be slow; failures are propagated to the caller unchanged.
#[async_trait::async_trait]
pub trait GpsOracle: Send + Sync {
    /// Current coordinate fix for a user.
    async fn user_location(&self, user_id: Uuid) -> anyhow::Result<Coordinate>;

    /// The full attraction list. Called once at startup.
    async fn attractions(&self) -> anyhow::Result<Vec<Attraction>>;
}

/// Source of raw per-(attraction, user) point scores.
///
/// Each call is independent; one failing call never affects concurrent calls.
#[async_trait::async_trait]
pub trait ScoringOracle: Send + Sync {
    async fn attraction_reward_points(
        &self,
        attraction_id: Uuid,
        user_id: Uuid,
    ) -> anyhow::Result<i32>;
}

/// Latitude bound of the Web Mercator projection, used for random fixes.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Simulated GPS oracle: uniform random fixes and a fixed attraction list.
pub struct SimulatedGps {
    latency: Duration,
}

impl SimulatedGps {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Add an artificial per-call delay to mimic a slow remote service.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedGps {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GpsOracle for SimulatedGps {
    async fn user_location(&self, _user_id: Uuid) -> anyhow::Result<Coordinate> {
        // ThreadRng is not Send; draw before the await point.
        let coordinate = random_coordinate();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(coordinate)
    }

    async fn attractions(&self) -> anyhow::Result<Vec<Attraction>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(builtin_attractions())
    }
}

/// Random coordinate anywhere on the projected globe.
pub fn random_coordinate() -> Coordinate {
    let mut rng = rand::thread_rng();
    Coordinate::new(
        rng.gen_range(-MAX_LATITUDE..=MAX_LATITUDE),
        rng.gen_range(-180.0..=180.0),
    )
}

/// Simulated scoring oracle: uniform random points in 1..=1000.
pub struct SimulatedScoring {
    latency: Duration,
}

impl SimulatedScoring {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedScoring {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScoringOracle for SimulatedScoring {
    async fn attraction_reward_points(
        &self,
        _attraction_id: Uuid,
        _user_id: Uuid,
    ) -> anyhow::Result<i32> {
        let points = rand::thread_rng().gen_range(1..=1000);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(points)
    }
}

/// The attraction list served by the simulated GPS oracle.
fn builtin_attractions() -> Vec<Attraction> {
    [
        ("Disneyland", 33.817595, -117.922008),
        ("Jackson Hole", 43.582767, -110.821999),
        ("Mojave National Preserve", 35.141689, -115.510399),
        ("Joshua Tree National Park", 33.881866, -115.90065),
        ("Buffalo National River", 35.985512, -92.757652),
        ("Hot Springs National Park", 34.52153, -93.042267),
        ("Kartchner Caverns State Park", 31.837551, -110.347382),
        ("Legend Valley", 39.937778, -82.40667),
        ("Flatiron Building", 40.741112, -73.989723),
        ("Fallingwater", 39.906113, -79.468056),
        ("Union Station", 38.897095, -77.006332),
        ("Roger Dean Stadium", 26.890959, -80.116577),
        ("Texas Memorial Stadium", 30.283682, -97.732536),
        ("Bryce Canyon National Park", 37.593048, -112.187332),
        ("Langley Park", 38.982586, -76.991379),
    ]
    .into_iter()
    .map(|(name, lat, lon)| Attraction::new(name, Coordinate::new(lat, lon)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_gps_fixes_stay_in_bounds() {
        let gps = SimulatedGps::new();
        for _ in 0..100 {
            let fix = gps.user_location(Uuid::new_v4()).await.unwrap();
            assert!(fix.latitude.abs() <= MAX_LATITUDE);
            assert!(fix.longitude.abs() <= 180.0);
        }
    }

    #[tokio::test]
    async fn simulated_scoring_points_stay_in_range() {
        let scoring = SimulatedScoring::new();
        for _ in 0..100 {
            let points = scoring
                .attraction_reward_points(Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap();
            assert!((1..=1000).contains(&points));
        }
    }

    #[tokio::test]
    async fn builtin_attraction_list_is_stable() {
        let gps = SimulatedGps::new();
        let attractions = gps.attractions().await.unwrap();
        assert_eq!(attractions.len(), 15);
        assert_eq!(attractions[0].name, "Disneyland");
    }
}
