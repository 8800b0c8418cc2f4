use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::observability::metrics::{CYCLE_DURATION, REFRESH_CYCLES, TICKS_DROPPED};
use crate::scrape::job::SourceJob;
use crate::snapshot::{Snapshot, SnapshotStore};

/// Drives the refresh pipeline: cycle 0 immediately at startup, then one
/// cycle per interval tick, for the process lifetime.
///
/// At most one cycle is in flight. A tick that lands while a cycle is still
/// running is dropped, not queued.
pub struct RefreshScheduler {
    jobs: Vec<SourceJob>,
    store: Arc<SnapshotStore>,
    interval: Duration,
    running: AtomicBool,
}

impl RefreshScheduler {
    pub fn new(jobs: Vec<SourceJob>, store: Arc<SnapshotStore>, interval: Duration) -> Self {
        RefreshScheduler {
            jobs,
            store,
            interval,
            running: AtomicBool::new(false),
        }
    }

    pub async fn run(self: Arc<Self>) {
        self.run_cycle().await;

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// One full fetch+extract pass over every source, ending in exactly one
    /// commit. Returns false when the pass was dropped because a cycle was
    /// already in flight.
    pub async fn run_cycle(&self) -> bool {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            TICKS_DROPPED.inc();
            tracing::warn!("refresh tick dropped: previous cycle still running");
            return false;
        }

        let started = Instant::now();
        let results = join_all(
            self.jobs
                .iter()
                .map(|job| async { (job.symbol(), job.run().await) }),
        )
        .await;

        let now = Utc::now();
        let prev = self.store.read().await;
        self.store.commit(Snapshot::next_cycle(&prev, &results, now)).await;

        REFRESH_CYCLES.inc();
        CYCLE_DURATION.observe(started.elapsed().as_secs_f64());
        tracing::info!("quotes refreshed at {}", now.format("%H:%M:%S"));

        self.running.store(false, Ordering::SeqCst);
        true
    }
}
