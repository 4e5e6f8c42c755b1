// SPDX-License-Identifier: MIT

//! Error types for the tracking and rewarding pipeline.

/// Errors surfaced by the tracking core.
///
/// A stop request to the scheduler is normal control flow and never appears
/// here. The core performs no retries; callers layer retry policy on top.
#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    /// The GPS oracle failed to produce a fix. The refresh was aborted and
    /// no location was appended.
    #[error("GPS oracle failure: {0}")]
    GpsOracle(anyhow::Error),

    /// A single scoring oracle lookup failed on a read path.
    #[error("Scoring oracle failure: {0}")]
    ScoringOracle(anyhow::Error),

    /// One or more scoring tasks within a `calculate_rewards` call failed.
    ///
    /// Tasks that succeeded have already appended to the ledger; those
    /// appends are not rolled back.
    #[error("{failed} of {submitted} reward scoring tasks failed")]
    RewardAggregate { submitted: usize, failed: usize },
}

/// Result type alias for the tracking core.
pub type Result<T> = std::result::Result<T, TrackingError>;
