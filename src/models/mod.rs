//! Data models shared between collectors, the rate engine and the status line.
//!
//! Snapshots are read fresh every cycle and dropped afterwards; only the
//! cumulative counters end up in [`crate::rates::CycleState`].

mod segment;

pub use segment::{Color, Segment};

/// Raw block counts from `statvfs(3)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStats {
    pub blocks: u64,
    pub blocks_available: u64,
    /// Unit for the block counts, in bytes.
    pub fragment_size: u64,
}

/// Disk usage for one mount, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemDiskInfo {
    pub used: u64,
    pub total: u64,
}

impl From<FsStats> for SystemDiskInfo {
    fn from(st: FsStats) -> Self {
        Self {
            used: st
                .blocks
                .saturating_sub(st.blocks_available)
                .saturating_mul(st.fragment_size),
            total: st.blocks.saturating_mul(st.fragment_size),
        }
    }
}

/// Memory totals from `/proc/meminfo`, in kB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemMemInfo {
    pub total: u64,
    pub available: u64,
}

impl SystemMemInfo {
    pub fn total_bytes(&self) -> u64 {
        self.total.saturating_mul(1024)
    }

    pub fn used_bytes(&self) -> u64 {
        self.total
            .saturating_sub(self.available)
            .saturating_mul(1024)
    }
}

/// Cumulative IP octet counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemNetInfo {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Cumulative aggregate CPU ticks since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemCpuInfo {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
}

impl SystemCpuInfo {
    pub fn busy(&self) -> u64 {
        self.user
            .saturating_add(self.nice)
            .saturating_add(self.system)
            .saturating_add(self.iowait)
    }
}

/// Load averages from `/proc/loadavg`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemLoadInfo {
    pub lavg1: f64,
    pub lavg5: f64,
    pub lavg15: f64,
}
