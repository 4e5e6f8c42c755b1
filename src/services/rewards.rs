// SPDX-License-Identifier: MIT

//! Reward engine: fan-out scoring of qualifying (visit, attraction) pairs.
//!
//! For each fix in a user's history and each attraction within reward range,
//! one scoring request is dispatched onto the shared bounded worker pool. The
//! call resolves only after every dispatched task finishes; failures are
//! collected into a single aggregate error while successful appends stand.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures_util::{stream, StreamExt};
use tokio::sync::Semaphore;
use uuid::Uuid;

use crate::error::{Result, TrackingError};
use crate::models::{RewardRecord, User};
use crate::services::{AttractionCatalog, ProximityPolicy, ScoringOracle};

pub struct RewardEngine {
    scoring: Arc<dyn ScoringOracle>,
    catalog: Arc<AttractionCatalog>,
    proximity: Arc<ProximityPolicy>,
    /// Shared worker pool, bounding scoring concurrency process-wide.
    workers: Arc<Semaphore>,
}

impl RewardEngine {
    pub fn new(
        scoring: Arc<dyn ScoringOracle>,
        catalog: Arc<AttractionCatalog>,
        proximity: Arc<ProximityPolicy>,
        workers: Arc<Semaphore>,
    ) -> Self {
        Self {
            scoring,
            catalog,
            proximity,
            workers,
        }
    }

    pub fn proximity(&self) -> &ProximityPolicy {
        &self.proximity
    }

    /// Score every qualifying (visited location, attraction) pair and append
    /// a reward record per pair to the user's ledger.
    ///
    /// The history is snapshotted at call time; fixes appended while the call
    /// is in flight are picked up by the next call. Each qualifying pair is
    /// evaluated exactly once per call, but repeated calls on unchanged
    /// history append again — deduplication across calls is deliberately not
    /// performed (one record per visit).
    ///
    /// Pairs are submitted concurrently with no ordering guarantee; ledger
    /// append order is task completion order. Returns only once every task
    /// has completed. If any task failed, the aggregate error reports the
    /// counts; records appended by succeeding tasks remain.
    pub async fn calculate_rewards(&self, user: &User) -> Result<()> {
        let locations = user.visited_locations();

        let mut pairs = Vec::new();
        for visited in &locations {
            for attraction in self.catalog.all() {
                if self
                    .proximity
                    .is_within_reward_range(&visited.coordinate, attraction)
                {
                    pairs.push((visited.clone(), attraction.clone()));
                }
            }
        }

        let submitted = pairs.len();
        if submitted == 0 {
            return Ok(());
        }

        let failed = AtomicUsize::new(0);

        stream::iter(pairs)
            .for_each_concurrent(None, |(visited, attraction)| {
                let failed = &failed;
                async move {
                    let Ok(_permit) = self.workers.acquire().await else {
                        failed.fetch_add(1, Ordering::Relaxed);
                        return;
                    };

                    match self
                        .scoring
                        .attraction_reward_points(attraction.id, user.id())
                        .await
                    {
                        Ok(points) => {
                            user.add_reward(RewardRecord {
                                visited_location: visited,
                                attraction,
                                points,
                            });
                        }
                        Err(e) => {
                            tracing::warn!(
                                user = %user.username(),
                                attraction = %attraction.name,
                                error = %e,
                                "Reward scoring task failed"
                            );
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
            .await;

        let failed = failed.load(Ordering::Relaxed);
        if failed > 0 {
            return Err(TrackingError::RewardAggregate { submitted, failed });
        }

        tracing::debug!(
            user = %user.username(),
            rewards = submitted,
            "Reward calculation complete"
        );
        Ok(())
    }

    /// Point value the scoring oracle grants for one (attraction, user) pair.
    ///
    /// Used by read paths that report points without touching the ledger.
    pub async fn reward_points(&self, attraction_id: Uuid, user_id: Uuid) -> Result<i32> {
        self.scoring
            .attraction_reward_points(attraction_id, user_id)
            .await
            .map_err(TrackingError::ScoringOracle)
    }
}
