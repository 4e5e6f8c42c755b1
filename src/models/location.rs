//! Coordinates and timestamped location fixes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversion constant used by the GPS oracle's distance convention.
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.15077945;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in statute miles.
    ///
    /// One degree of arc is 60 nautical miles; the acos argument is clamped
    /// so identical coordinates yield 0.0 instead of NaN from rounding.
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let lon2 = other.longitude.to_radians();

        let angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos())
            .clamp(-1.0, 1.0)
            .acos();

        let nautical_miles = 60.0 * angle.to_degrees();
        STATUTE_MILES_PER_NAUTICAL_MILE * nautical_miles
    }
}

/// A timestamped coordinate fix recorded for a user.
///
/// Created exactly once per location fetch and appended to the owning user's
/// history; never mutated afterwards. The most recently appended fix is the
/// user's "current" location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitedLocation {
    pub user_id: Uuid,
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl VisitedLocation {
    pub fn new(user_id: Uuid, coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            coordinate,
            timestamp,
        }
    }
}
