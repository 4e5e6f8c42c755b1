// SPDX-License-Identifier: MIT

//! Tracking pipeline and user population.
//!
//! The core workflow for one user:
//! 1. Fetch a fresh fix from the GPS oracle
//! 2. Append it to the user's location history
//! 3. Run reward calculation for the new history and wait for it
//! 4. Return the fresh fix to the caller

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::error::{Result, TrackingError};
use crate::models::{Attraction, Coordinate, RewardRecord, User, VisitedLocation};
use crate::services::{AttractionCatalog, GpsOracle, RewardEngine, NEAREST_ATTRACTIONS_COUNT};

/// A nearby attraction with its computed distance and reward points, as
/// consumed by the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyAttraction {
    pub attraction: Attraction,
    pub distance_miles: f64,
    pub reward_points: i32,
}

/// Orchestrates location refresh and rewarding for the user population.
pub struct TrackingService {
    gps: Arc<dyn GpsOracle>,
    rewards: RewardEngine,
    catalog: Arc<AttractionCatalog>,
    /// Username → user. Insertion-only during normal operation; read
    /// concurrently by the scheduler snapshot and dispatched tasks.
    users: DashMap<String, Arc<User>>,
    /// Shared worker pool, also used by the reward engine.
    workers: Arc<Semaphore>,
}

impl TrackingService {
    pub fn new(
        gps: Arc<dyn GpsOracle>,
        rewards: RewardEngine,
        catalog: Arc<AttractionCatalog>,
        workers: Arc<Semaphore>,
    ) -> Self {
        Self {
            gps,
            rewards,
            catalog,
            users: DashMap::new(),
            workers,
        }
    }

    pub fn reward_engine(&self) -> &RewardEngine {
        &self.rewards
    }

    // ─── Population ──────────────────────────────────────────────

    /// Register a user. An existing user with the same username is kept.
    pub fn add_user(&self, user: User) -> Arc<User> {
        self.users
            .entry(user.username().to_string())
            .or_insert_with(|| Arc::new(user))
            .clone()
    }

    pub fn user(&self, username: &str) -> Option<Arc<User>> {
        self.users.get(username).map(|u| Arc::clone(&u))
    }

    /// Snapshot of the current population.
    pub fn all_users(&self) -> Vec<Arc<User>> {
        self.users.iter().map(|u| Arc::clone(&u)).collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // ─── Pipeline ────────────────────────────────────────────────

    /// Fetch a fresh fix for `user`, append it, and run rewarding.
    ///
    /// If the GPS oracle fails, nothing is appended. If reward calculation
    /// fails, the fix has already been appended (location tracking and
    /// rewarding are not atomic together) and the aggregate error is
    /// surfaced.
    pub async fn refresh_location(&self, user: &Arc<User>) -> Result<VisitedLocation> {
        let coordinate = {
            let _permit = self
                .workers
                .acquire()
                .await
                .map_err(|e| TrackingError::GpsOracle(e.into()))?;
            self.gps
                .user_location(user.id())
                .await
                .map_err(TrackingError::GpsOracle)?
        };

        let visited = VisitedLocation::new(user.id(), coordinate, Utc::now());
        user.add_visited_location(visited.clone());

        self.rewards.calculate_rewards(user).await?;
        Ok(visited)
    }

    /// The user's most recent fix, refreshing only if the history is empty.
    pub async fn current_location(&self, user: &Arc<User>) -> Result<VisitedLocation> {
        match user.last_visited_location() {
            Some(last) => Ok(last),
            None => self.refresh_location(user).await,
        }
    }

    /// Snapshot of the user's reward ledger.
    pub fn rewards(&self, user: &User) -> Vec<RewardRecord> {
        user.rewards()
    }

    /// The five attractions closest to `location`, each with its distance
    /// and the points the scoring oracle would grant `user` for it.
    pub async fn nearest_attractions(
        &self,
        user: &User,
        location: &Coordinate,
    ) -> Result<Vec<NearbyAttraction>> {
        let mut nearby = Vec::with_capacity(NEAREST_ATTRACTIONS_COUNT);
        for attraction in self.catalog.nearest(location, NEAREST_ATTRACTIONS_COUNT) {
            let reward_points = self.rewards.reward_points(attraction.id, user.id()).await?;
            nearby.push(NearbyAttraction {
                distance_miles: location.distance_miles(&attraction.coordinate),
                attraction,
                reward_points,
            });
        }
        Ok(nearby)
    }
}
