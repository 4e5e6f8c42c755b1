// SPDX-License-Identifier: MIT

//! Shared fixtures: scripted oracles and a harness wiring up the tracking
//! core with them.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Semaphore;
use uuid::Uuid;

use tourtrack::models::{Attraction, Coordinate};
use tourtrack::services::{
    AttractionCatalog, GpsOracle, ProximityPolicy, RewardEngine, ScoringOracle, TrackingService,
};

/// GPS oracle returning one scripted fix for every user.
pub struct ScriptedGps {
    fix: Mutex<Coordinate>,
    attractions: Vec<Attraction>,
    fail: AtomicBool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedGps {
    pub fn returning(fix: Coordinate) -> Self {
        Self {
            fix: Mutex::new(fix),
            attractions: Vec::new(),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_fix(&self, fix: Coordinate) {
        *self.fix.lock() = fix;
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// How many user_location calls have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GpsOracle for ScriptedGps {
    async fn user_location(&self, _user_id: Uuid) -> anyhow::Result<Coordinate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("gps oracle unavailable");
        }
        Ok(*self.fix.lock())
    }

    async fn attractions(&self) -> anyhow::Result<Vec<Attraction>> {
        Ok(self.attractions.clone())
    }
}

/// Scoring oracle returning a fixed point value, with per-attraction
/// scripted failures.
pub struct ScriptedScoring {
    points: i32,
    fail_attractions: Mutex<HashSet<Uuid>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedScoring {
    pub fn returning(points: i32) -> Self {
        Self {
            points,
            fail_attractions: Mutex::new(HashSet::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make scoring fail for the given attraction ids.
    pub fn fail_for(&self, ids: impl IntoIterator<Item = Uuid>) {
        let mut guard = self.fail_attractions.lock();
        guard.clear();
        guard.extend(ids);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ScoringOracle for ScriptedScoring {
    async fn attraction_reward_points(
        &self,
        attraction_id: Uuid,
        _user_id: Uuid,
    ) -> anyhow::Result<i32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_attractions.lock().contains(&attraction_id) {
            anyhow::bail!("scoring oracle rejected attraction {attraction_id}");
        }
        Ok(self.points)
    }
}

/// Everything a test needs to drive the tracking core.
#[allow(dead_code)]
pub struct Harness {
    pub service: Arc<TrackingService>,
    pub gps: Arc<ScriptedGps>,
    pub scoring: Arc<ScriptedScoring>,
}

/// Wire up a tracking service over scripted oracles.
///
/// `reward_radius_miles` seeds the proximity policy; the worker pool uses the
/// production default size.
#[allow(dead_code)]
pub fn harness(
    attractions: Vec<Attraction>,
    gps_fix: Coordinate,
    points: i32,
    reward_radius_miles: f64,
) -> Harness {
    let gps = Arc::new(ScriptedGps::returning(gps_fix));
    let scoring = Arc::new(ScriptedScoring::returning(points));

    let catalog = Arc::new(AttractionCatalog::new(attractions));
    let proximity = Arc::new(ProximityPolicy::new(reward_radius_miles));
    let workers = Arc::new(Semaphore::new(64));

    let engine = RewardEngine::new(
        Arc::clone(&scoring) as Arc<dyn ScoringOracle>,
        Arc::clone(&catalog),
        proximity,
        Arc::clone(&workers),
    );
    let service = Arc::new(TrackingService::new(
        Arc::clone(&gps) as Arc<dyn GpsOracle>,
        engine,
        catalog,
        workers,
    ));

    Harness {
        service,
        gps,
        scoring,
    }
}

/// Shorthand for building a named attraction.
#[allow(dead_code)]
pub fn attraction(name: &str, latitude: f64, longitude: f64) -> Attraction {
    Attraction::new(name, Coordinate::new(latitude, longitude))
}
