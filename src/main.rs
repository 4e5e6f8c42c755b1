// SPDX-License-Identifier: MIT

//! Tourtrack demo daemon
//!
//! Wires the tracking core to simulated GPS and scoring oracles, seeds an
//! internal user population, and runs the background tracker until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;
use tokio::sync::Semaphore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourtrack::config::Config;
use tourtrack::models::{User, VisitedLocation};
use tourtrack::services::{
    AttractionCatalog, GpsOracle, LocationTracker, ProximityPolicy, RewardEngine, SimulatedGps,
    SimulatedScoring, TrackingService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(
        poll_secs = config.polling_interval.as_secs(),
        workers = config.worker_pool_size,
        users = config.internal_user_count,
        "Starting tourtrack"
    );

    // Simulated oracles stand in for the external GPS and scoring services.
    let gps: Arc<dyn GpsOracle> = Arc::new(SimulatedGps::with_latency(Duration::from_millis(50)));
    let scoring = Arc::new(SimulatedScoring::with_latency(Duration::from_millis(20)));

    let catalog = Arc::new(AttractionCatalog::load(gps.as_ref()).await?);
    let proximity = Arc::new(ProximityPolicy::new(config.reward_radius_miles));
    let workers = Arc::new(Semaphore::new(config.worker_pool_size));

    let engine = RewardEngine::new(scoring, Arc::clone(&catalog), proximity, Arc::clone(&workers));
    let service = Arc::new(TrackingService::new(gps, engine, catalog, workers));

    seed_population(&service, config.internal_user_count);
    tracing::info!(users = service.user_count(), "Population seeded");

    let tracker = LocationTracker::start(Arc::clone(&service), config.polling_interval);
    tracing::info!("Tracker running");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested, stopping tracker");
    tracker.stop().await;
    tracing::info!("Tracker stopped");

    Ok(())
}

/// Seed internal users, each with three random historical fixes from the
/// last 30 days.
fn seed_population(service: &TrackingService, count: usize) {
    let mut rng = rand::thread_rng();
    for i in 0..count {
        let user = service.add_user(User::new(format!("internal_user{i}")));
        for _ in 0..3 {
            let timestamp = Utc::now() - ChronoDuration::days(rng.gen_range(0..30));
            user.add_visited_location(VisitedLocation::new(
                user.id(),
                tourtrack::services::oracles::random_coordinate(),
                timestamp,
            ));
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tourtrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
