//! Reward ledger entries.

use serde::{Deserialize, Serialize};

use crate::models::{Attraction, VisitedLocation};

/// A single earned reward: a visit that qualified for an attraction, with the
/// points the scoring oracle granted for the pair.
///
/// Created exactly once per qualifying (location, attraction) pair per
/// tracking cycle. Records are never deduplicated across cycles: revisiting
/// the same attraction with a new fix earns a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardRecord {
    pub visited_location: VisitedLocation,
    pub attraction: Attraction,
    pub points: i32,
}
