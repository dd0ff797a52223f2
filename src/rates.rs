//! Rate computation from cumulative counters.
//!
//! Network octets and CPU ticks only ever grow, so the status line differences
//! consecutive samples. The previous sample lives in [`CycleState`], which the
//! loop owns and threads through every cycle by `&mut`.

use std::time::Duration;

use crate::models::{SystemCpuInfo, SystemNetInfo};

// ---------------------------------------------------------------------------
// Delta helpers
// ---------------------------------------------------------------------------

/// Compute u64 delta, returning `None` on counter regression (wrap or reset).
pub fn du64(curr: u64, prev: u64) -> Option<u64> {
    curr.checked_sub(prev)
}

/// Per-second rate of a cumulative counter over `interval`.
///
/// A counter that went backwards yields 0 rather than a wrapped huge value.
pub fn rate_per_sec(prev: u64, curr: u64, interval: Duration) -> u64 {
    let secs = interval.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    du64(curr, prev).map_or(0, |d| (d as f64 / secs) as u64)
}

/// Fraction of ticks spent busy, `busy / (busy + idle)`.
///
/// Returns NaN when no ticks elapsed at all.
pub fn busy_fraction(busy: u64, idle: u64) -> f64 {
    busy as f64 / busy.saturating_add(idle) as f64
}

// ---------------------------------------------------------------------------
// Rate state
// ---------------------------------------------------------------------------

/// Counters carried from one cycle to the next.
///
/// Each field is only written after a successful read of its metric; a failed
/// read leaves the previous sample in place.
#[derive(Debug, Default)]
pub struct CycleState {
    /// Last network counters, `None` until the first successful read.
    pub prev_net: Option<SystemNetInfo>,
    /// Cumulative busy ticks at the last CPU read (0 before the first).
    pub prev_busy: u64,
    /// Cumulative idle ticks at the last CPU read (0 before the first).
    pub prev_idle: u64,
    /// CPUs this process may run on; the load tiers scale with it.
    pub cpu_count: usize,
}

impl CycleState {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            cpu_count: cpu_count.max(1),
            ..Default::default()
        }
    }

    /// Folds in a network sample and returns `(rx/s, tx/s)`.
    ///
    /// The first sample has nothing to compare with, so it reports zero
    /// instead of the whole since-boot total.
    pub fn update_net(&mut self, net: SystemNetInfo, interval: Duration) -> (u64, u64) {
        let rates = match self.prev_net {
            Some(prev) => (
                rate_per_sec(prev.rx_bytes, net.rx_bytes, interval),
                rate_per_sec(prev.tx_bytes, net.tx_bytes, interval),
            ),
            None => (0, 0),
        };
        self.prev_net = Some(net);
        rates
    }

    /// Folds in a CPU sample and returns the busy fraction since the last one.
    ///
    /// The first sample is measured against zero, i.e. it is the average
    /// since boot.
    pub fn update_cpu(&mut self, cpu: &SystemCpuInfo) -> f64 {
        let busy = cpu.busy();
        let idle = cpu.idle;

        let d_busy = du64(busy, self.prev_busy).unwrap_or(0);
        let d_idle = du64(idle, self.prev_idle).unwrap_or(0);

        self.prev_busy = busy;
        self.prev_idle = idle;

        busy_fraction(d_busy, d_idle)
    }
}
