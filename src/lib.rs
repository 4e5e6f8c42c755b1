// SPDX-License-Identifier: MIT

//! Tourtrack: continuous user location tracking with attraction rewards
//!
//! This crate tracks the last known position of a population of users and,
//! for every newly observed position, awards points for attractions within
//! reward range. A background scheduler re-evaluates every user once per
//! polling interval; a bounded worker pool fans out the per-pair scoring
//! requests and joins them before a refresh completes.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, TrackingError};
