//! User model: identity plus the location history and reward ledger.

use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::{RewardRecord, VisitedLocation};

/// A tracked user.
///
/// The location history and reward ledger are interior-mutable so a shared
/// `Arc<User>` can be appended to by concurrent scoring tasks without losing
/// updates. Both collections are append-only; read paths return snapshots.
#[derive(Debug)]
pub struct User {
    id: Uuid,
    username: String,
    visited_locations: Mutex<Vec<VisitedLocation>>,
    rewards: Mutex<Vec<RewardRecord>>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), username)
    }

    pub fn with_id(id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            visited_locations: Mutex::new(Vec::new()),
            rewards: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Append a fix to the location history.
    pub fn add_visited_location(&self, location: VisitedLocation) {
        self.visited_locations.lock().push(location);
    }

    /// Snapshot of the ordered location history.
    pub fn visited_locations(&self) -> Vec<VisitedLocation> {
        self.visited_locations.lock().clone()
    }

    /// The most recently appended fix, if any.
    pub fn last_visited_location(&self) -> Option<VisitedLocation> {
        self.visited_locations.lock().last().cloned()
    }

    /// Append an earned reward to the ledger.
    pub fn add_reward(&self, reward: RewardRecord) {
        self.rewards.lock().push(reward);
    }

    /// Snapshot of the reward ledger.
    pub fn rewards(&self) -> Vec<RewardRecord> {
        self.rewards.lock().clone()
    }

    /// Sum of all earned points.
    pub fn total_reward_points(&self) -> i32 {
        self.rewards.lock().iter().map(|r| r.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attraction, Coordinate};

    fn fix(user: &User, lat: f64, lon: f64) -> VisitedLocation {
        VisitedLocation::new(user.id(), Coordinate::new(lat, lon), chrono::Utc::now())
    }

    #[test]
    fn history_preserves_insertion_order() {
        let user = User::new("jon");
        user.add_visited_location(fix(&user, 1.0, 1.0));
        user.add_visited_location(fix(&user, 2.0, 2.0));
        user.add_visited_location(fix(&user, 3.0, 3.0));

        let history = user.visited_locations();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].coordinate.latitude, 1.0);
        assert_eq!(history[2].coordinate.latitude, 3.0);

        let last = user.last_visited_location().unwrap();
        assert_eq!(last.coordinate.latitude, 3.0);
    }

    #[test]
    fn empty_history_has_no_current_location() {
        let user = User::new("jon");
        assert!(user.last_visited_location().is_none());
        assert!(user.visited_locations().is_empty());
    }

    #[test]
    fn ledger_totals_points() {
        let user = User::new("jon");
        let attraction = Attraction::new("Disneyland", Coordinate::new(33.8, -117.9));
        for points in [100, 250, 7] {
            user.add_reward(RewardRecord {
                visited_location: fix(&user, 33.8, -117.9),
                attraction: attraction.clone(),
                points,
            });
        }

        assert_eq!(user.rewards().len(), 3);
        assert_eq!(user.total_reward_points(), 357);
    }
}
