// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod attraction;
pub mod location;
pub mod reward;
pub mod user;

pub use attraction::Attraction;
pub use location::{Coordinate, VisitedLocation};
pub use reward::RewardRecord;
pub use user::User;
