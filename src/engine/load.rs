use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use super::calculation::heavy_calculation;
use super::uptime::format_uptime;

// ─── Public types ────────────────────────────────────────────────

/// Process-wide counters plus the simulated workload.
///
/// Built once in `main` and shared as `Arc<LoadEngine>`. Every mutation is
/// a single atomic op, so the hot paths never take a lock and concurrent
/// heavy calculations run fully in parallel.
pub struct LoadEngine {
    /// Bumped once per `/api/test` hit.
    request_count: AtomicU64,

    /// Completed heavy calculations.
    processed_count: AtomicU64,

    /// Sum of every recorded calculation duration (ms).
    total_processing_ms: AtomicU64,

    /// Monotonic anchor for uptime.
    started_at: Instant,

    /// Wall-clock time of initialization, for reporting only.
    started_at_wall: DateTime<Local>,
}

// ─── LoadEngine impl ─────────────────────────────────────────────

impl LoadEngine {
    pub fn new() -> Self {
        Self {
            request_count: AtomicU64::new(0),
            processed_count: AtomicU64::new(0),
            total_processing_ms: AtomicU64::new(0),
            started_at: Instant::now(),
            started_at_wall: Local::now(),
        }
    }

    // ── Request counter ─────────────────────────────────────────

    /// Atomic fetch-and-increment. Across N concurrent callers each value
    /// in `1..=N` is handed out exactly once.
    pub fn increment_and_get_request_count(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn total_requests(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    // ── Simulated load ──────────────────────────────────────────

    /// Runs the CPU-bound calculation, then records its duration.
    ///
    /// Blocks the calling thread for the whole computation; async callers
    /// should move it onto a blocking pool. There is no upper bound on
    /// `iterations` and no way to interrupt a call once started.
    pub fn perform_heavy_calculation(&self, iterations: u32) -> f64 {
        let started = Instant::now();
        let result = heavy_calculation(iterations);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        self.record_processing(elapsed_ms);
        result
    }

    /// The sum is published before the count (Release), and readers load
    /// the count first (Acquire), so any count a reader sees is covered by
    /// the sum it reads afterwards.
    fn record_processing(&self, elapsed_ms: u64) {
        self.total_processing_ms
            .fetch_add(elapsed_ms, Ordering::Relaxed);
        self.processed_count.fetch_add(1, Ordering::Release);
    }

    pub fn processed_count(&self) -> u64 {
        self.processed_count.load(Ordering::Acquire)
    }

    /// Mean calculation time in ms, or `0.0` before the first completes.
    pub fn average_processing_time(&self) -> f64 {
        let processed = self.processed_count.load(Ordering::Acquire);
        if processed == 0 {
            return 0.0;
        }
        let total = self.total_processing_ms.load(Ordering::Relaxed);
        total as f64 / processed as f64
    }

    // ── Uptime ──────────────────────────────────────────────────

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// `"{H} hours, {M} minutes, {S} seconds"` since initialization.
    pub fn uptime_string(&self) -> String {
        format_uptime(self.uptime())
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at_wall
    }
}

impl Default for LoadEngine {
    fn default() -> Self {
        Self::new()
    }
}
