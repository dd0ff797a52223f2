//! Fixed-period pacing for the sampling loop.

use std::time::{Duration, Instant};

use tracing::trace;

/// Period between two status lines.
pub const INTERVAL: Duration = Duration::from_secs(1);

/// Keeps cycles on a fixed period by sleeping whatever is left of it.
///
/// A cycle that overruns starts the next one immediately; there is no
/// catch-up beyond that.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(INTERVAL)
    }
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Marks the start of a cycle.
    pub fn start(&self) -> Instant {
        Instant::now()
    }

    /// Time left in the period after `elapsed`, never negative.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }

    /// Sleeps out the rest of the period begun at `started`.
    pub fn sleep_until_next(&self, started: Instant) {
        let elapsed = started.elapsed();
        let remaining = self.remaining(elapsed);
        trace!(?elapsed, ?remaining, "cycle finished");
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
