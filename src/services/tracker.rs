// SPDX-License-Identifier: MIT

//! Background scheduler that periodically refreshes every user.
//!
//! The tracker owns a cancellation signal and a handle to its loop task
//! rather than wrapping a thread. One cycle snapshots the population and
//! fires one refresh task per user without waiting for any of them; the loop
//! then sleeps for the polling interval unless a stop has been requested.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::services::TrackingService;

/// Default time between tracking cycles.
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Scheduler lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Running,
    Stopping,
    Stopped,
}

const RUNNING: u8 = 0;
const STOPPING: u8 = 1;
const STOPPED: u8 = 2;

pub struct LocationTracker {
    state: Arc<AtomicU8>,
    stop_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl LocationTracker {
    /// Spawn the tracking loop. The tracker starts in `Running` and begins
    /// its first cycle immediately.
    pub fn start(service: Arc<TrackingService>, polling_interval: Duration) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        let state = Arc::new(AtomicU8::new(RUNNING));

        let handle = tokio::spawn(run_loop(
            service,
            polling_interval,
            stop_rx,
            Arc::clone(&state),
        ));

        Self {
            state,
            stop_tx,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn state(&self) -> TrackerState {
        match self.state.load(Ordering::Acquire) {
            RUNNING => TrackerState::Running,
            STOPPING => TrackerState::Stopping,
            _ => TrackerState::Stopped,
        }
    }

    /// Request the loop to exit and wait for it to do so.
    ///
    /// Cancels a pending sleep, so shutdown is not delayed by the polling
    /// interval. Refresh tasks already dispatched for the in-flight cycle are
    /// not cancelled; they may still append rewards after this returns.
    /// Calling `stop` more than once is harmless.
    pub async fn stop(&self) {
        let _ = self.state.compare_exchange(
            RUNNING,
            STOPPING,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        let _ = self.stop_tx.send(true);

        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Tracker loop task failed");
            }
        }
    }
}

async fn run_loop(
    service: Arc<TrackingService>,
    polling_interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
    state: Arc<AtomicU8>,
) {
    loop {
        if *stop_rx.borrow() {
            break;
        }

        let users = service.all_users();
        tracing::debug!(users = users.len(), "Tracking cycle starting");
        let cycle_start = Instant::now();

        // Fire and forget: one refresh per user, failures logged and never
        // allowed to halt the cycle.
        for user in users {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                if let Err(e) = service.refresh_location(&user).await {
                    tracing::warn!(
                        user = %user.username(),
                        error = %e,
                        "Location refresh failed"
                    );
                }
            });
        }

        tracing::debug!(
            elapsed_ms = cycle_start.elapsed().as_millis() as u64,
            "Tracking cycle dispatched, sleeping"
        );

        tokio::select! {
            _ = tokio::time::sleep(polling_interval) => {}
            _ = stop_rx.changed() => break,
        }
    }

    state.store(STOPPED, Ordering::Release);
    tracing::debug!("Tracker stopped");
}
