//! Attraction model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Coordinate;

/// A named point of interest with a fixed coordinate.
///
/// The full set of attractions is loaded once at startup from the GPS oracle
/// and shared read-only by all workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub id: Uuid,
    /// Display name
    pub name: String,
    pub coordinate: Coordinate,
}

impl Attraction {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coordinate,
        }
    }
}
