// SPDX-License-Identifier: MIT

//! Services module - tracking and rewarding logic.

pub mod catalog;
pub mod oracles;
pub mod proximity;
pub mod rewards;
pub mod tracker;
pub mod tracking;

pub use catalog::{AttractionCatalog, NEAREST_ATTRACTIONS_COUNT};
pub use oracles::{GpsOracle, ScoringOracle, SimulatedGps, SimulatedScoring};
pub use proximity::{ProximityPolicy, DEFAULT_REWARD_RADIUS_MILES, DISPLAY_RADIUS_MILES};
pub use rewards::RewardEngine;
pub use tracker::{LocationTracker, TrackerState, DEFAULT_POLLING_INTERVAL};
pub use tracking::{NearbyAttraction, TrackingService};
