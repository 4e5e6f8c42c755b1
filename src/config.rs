//! Application configuration loaded from environment variables.
//!
//! Every knob has a default, so the daemon runs with no environment at all;
//! unparsable values fall back to the default rather than aborting startup.

use std::env;
use std::time::Duration;

use crate::services::{DEFAULT_POLLING_INTERVAL, DEFAULT_REWARD_RADIUS_MILES};

/// Size of the shared worker pool bounding GPS and scoring concurrency.
pub const DEFAULT_WORKER_POOL_SIZE: usize = 64;

/// Number of users the demo binary seeds at startup.
pub const DEFAULT_INTERNAL_USER_COUNT: usize = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time between tracking cycles
    pub polling_interval: Duration,
    /// Worker pool size for GPS fetch and reward scoring tasks
    pub worker_pool_size: usize,
    /// Initial reward radius in statute miles
    pub reward_radius_miles: f64,
    /// How many internal users the demo binary seeds
    pub internal_user_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            polling_interval: DEFAULT_POLLING_INTERVAL,
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
            reward_radius_miles: DEFAULT_REWARD_RADIUS_MILES,
            internal_user_count: DEFAULT_INTERNAL_USER_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            polling_interval: env::var("TRACKING_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.polling_interval),
            worker_pool_size: env::var("WORKER_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.worker_pool_size),
            reward_radius_miles: env::var("REWARD_RADIUS_MILES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.reward_radius_miles),
            internal_user_count: env::var("INTERNAL_USER_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.internal_user_count),
        }
    }
}
