// SPDX-License-Identifier: MIT

//! Attraction catalog: the read-only attraction snapshot and nearest-k
//! queries over it.

use crate::models::{Attraction, Coordinate};
use crate::services::GpsOracle;

/// How many attractions the nearest-attractions query returns.
pub const NEAREST_ATTRACTIONS_COUNT: usize = 5;

/// Immutable list of attractions, loaded once at startup from the GPS oracle
/// and shared read-only by all workers.
#[derive(Debug, Default, Clone)]
pub struct AttractionCatalog {
    attractions: Vec<Attraction>,
}

impl AttractionCatalog {
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions }
    }

    /// Fetch the attraction list from the GPS oracle.
    pub async fn load(gps: &dyn GpsOracle) -> anyhow::Result<Self> {
        let attractions = gps.attractions().await?;
        tracing::info!(count = attractions.len(), "Loaded attraction catalog");
        Ok(Self { attractions })
    }

    /// All attractions, in catalog order.
    pub fn all(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    /// The `k` attractions closest to `location`, ascending by distance.
    ///
    /// The sort is stable, so equidistant attractions keep catalog order. An
    /// empty catalog yields an empty result; `k` larger than the catalog
    /// yields the whole catalog.
    pub fn nearest(&self, location: &Coordinate, k: usize) -> Vec<Attraction> {
        let mut by_distance: Vec<(f64, &Attraction)> = self
            .attractions
            .iter()
            .map(|a| (location.distance_miles(&a.coordinate), a))
            .collect();
        by_distance.sort_by(|(d1, _), (d2, _)| d1.total_cmp(d2));

        by_distance
            .into_iter()
            .take(k)
            .map(|(_, a)| a.clone())
            .collect()
    }
}
