// SPDX-License-Identifier: MIT

//! Proximity thresholds for rewarding and display queries.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::{Attraction, Coordinate};

/// Default reward radius in statute miles.
pub const DEFAULT_REWARD_RADIUS_MILES: f64 = 10.0;

/// Fixed display radius in statute miles, used only for "is this attraction
/// near this point" queries, independent of rewarding.
pub const DISPLAY_RADIUS_MILES: f64 = 200.0;

/// Shared proximity configuration.
///
/// The reward radius is process-wide mutable state: changing it affects all
/// subsequent evaluations, not a single request. It is stored as raw f64 bits
/// in an atomic so readers never take a lock; tasks already in flight are not
/// required to observe a concurrent change. The radius value is not
/// validated.
#[derive(Debug)]
pub struct ProximityPolicy {
    reward_radius_bits: AtomicU64,
    default_radius: f64,
}

impl ProximityPolicy {
    pub fn new(default_radius_miles: f64) -> Self {
        Self {
            reward_radius_bits: AtomicU64::new(default_radius_miles.to_bits()),
            default_radius: default_radius_miles,
        }
    }

    /// Current reward radius in miles.
    pub fn reward_radius_miles(&self) -> f64 {
        f64::from_bits(self.reward_radius_bits.load(Ordering::Relaxed))
    }

    /// Override the reward radius for all subsequent evaluations.
    pub fn set_reward_radius_miles(&self, miles: f64) {
        self.reward_radius_bits
            .store(miles.to_bits(), Ordering::Relaxed);
    }

    /// Restore the default reward radius.
    pub fn reset_reward_radius(&self) {
        self.set_reward_radius_miles(self.default_radius);
    }

    /// Does a visit at `location` earn reward consideration for `attraction`?
    pub fn is_within_reward_range(&self, location: &Coordinate, attraction: &Attraction) -> bool {
        location.distance_miles(&attraction.coordinate) <= self.reward_radius_miles()
    }

    /// Is `attraction` near `location` for display purposes?
    pub fn is_within_display_range(&self, location: &Coordinate, attraction: &Attraction) -> bool {
        location.distance_miles(&attraction.coordinate) <= DISPLAY_RADIUS_MILES
    }
}

impl Default for ProximityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_REWARD_RADIUS_MILES)
    }
}
