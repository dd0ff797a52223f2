//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` filesystem states
//! for testing various system conditions.

use super::filesystem::MockFs;
use crate::models::FsStats;

const TYPICAL_NETSTAT: &str = "\
TcpExt: SyncookiesSent SyncookiesRecv SyncookiesFailed ListenOverflows ListenDrops
TcpExt: 0 0 0 0 0
IpExt: InNoRoutes InTruncatedPkts InMcastPkts OutMcastPkts InBcastPkts OutBcastPkts InOctets OutOctets InMcastOctets OutMcastOctets
IpExt: 0 0 1200 300 50 10 987654321 123456789 96000 24000
";

impl MockFs {
    /// Creates a typical, mostly idle 4-CPU system.
    ///
    /// Root filesystem 40% full, memory ~27% used, low load.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_mount(
            "/",
            FsStats {
                blocks: 25_000_000,
                blocks_available: 15_000_000,
                fragment_size: 4096,
            },
        );
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );
        fs.add_file("/proc/net/netstat", TYPICAL_NETSTAT);

        fs
    }

    /// Creates a system with memory pressure (available memory < 10%).
    pub fn memory_pressure() -> Self {
        let mut fs = Self::typical_system();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:          256000 kB
MemAvailable:     512000 kB
Buffers:           64000 kB
Cached:           256000 kB
SwapTotal:       4096000 kB
SwapFree:        1024000 kB
",
        );

        fs
    }

    /// Creates a 4-CPU system with 1-minute load above the CPU count.
    pub fn high_cpu_load() -> Self {
        let mut fs = Self::typical_system();

        fs.add_file("/proc/loadavg", "4.50 3.20 2.00 8/300 5678\n");

        fs
    }

    /// Creates a system whose root filesystem is 80% full.
    pub fn disk_filling_up() -> Self {
        let mut fs = Self::typical_system();

        fs.add_mount(
            "/",
            FsStats {
                blocks: 25_000_000,
                blocks_available: 5_000_000,
                fragment_size: 4096,
            },
        );

        fs
    }

    /// Creates a system where every metric source is missing.
    pub fn empty_proc() -> Self {
        Self::new()
    }
}
