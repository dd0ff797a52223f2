//! System collector for gathering the status line's metrics from `/proc/`.

use crate::collector::procfs::parser::{
    parse_global_stat, parse_loadavg, parse_meminfo, parse_netstat,
};
use crate::collector::traits::FileSystem;
use crate::models::{
    SystemCpuInfo, SystemDiskInfo, SystemLoadInfo, SystemMemInfo, SystemNetInfo,
};
use std::path::Path;

/// Error type for a single metric read.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading the source.
    Io(std::io::Error),
    /// The source was readable but its content was not understood.
    Parse(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// Collects system-wide metrics from `/proc/` and `statvfs`.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Collects used/total bytes of the filesystem mounted at `mount`.
    pub fn collect_disk(&self, mount: &Path) -> Result<SystemDiskInfo, CollectError> {
        let stats = self.fs.statvfs(mount)?;
        Ok(SystemDiskInfo::from(stats))
    }

    /// Collects memory information from `/proc/meminfo`.
    pub fn collect_meminfo(&self) -> Result<SystemMemInfo, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let info = parse_meminfo(&content).map_err(|e| CollectError::Parse(e.message))?;

        Ok(SystemMemInfo {
            total: info.mem_total,
            available: info.mem_available,
        })
    }

    /// Collects cumulative IP octet counters from `/proc/net/netstat`.
    pub fn collect_net(&self) -> Result<SystemNetInfo, CollectError> {
        let path = format!("{}/net/netstat", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let stats = parse_netstat(&content).map_err(|e| CollectError::Parse(e.message))?;

        Ok(SystemNetInfo {
            rx_bytes: stats.in_octets,
            tx_bytes: stats.out_octets,
        })
    }

    /// Collects aggregate CPU ticks from `/proc/stat`.
    pub fn collect_cpuinfo(&self) -> Result<SystemCpuInfo, CollectError> {
        let path = format!("{}/stat", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let stat = parse_global_stat(&content).map_err(|e| CollectError::Parse(e.message))?;

        let all = stat
            .aggregate()
            .ok_or_else(|| CollectError::Parse("missing aggregate cpu line".into()))?;

        Ok(SystemCpuInfo {
            user: all.user,
            nice: all.nice,
            system: all.system,
            idle: all.idle,
            iowait: all.iowait,
        })
    }

    /// Collects load average from `/proc/loadavg`.
    pub fn collect_loadavg(&self) -> Result<SystemLoadInfo, CollectError> {
        let path = format!("{}/loadavg", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let info = parse_loadavg(&content).map_err(|e| CollectError::Parse(e.message))?;

        Ok(SystemLoadInfo {
            lavg1: info.load1,
            lavg5: info.load5,
            lavg15: info.load15,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_collect_disk() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let disk = collector.collect_disk(Path::new("/")).unwrap();

        assert_eq!(disk.total, 25_000_000 * 4096);
        assert_eq!(disk.used, 10_000_000 * 4096);
    }

    #[test]
    fn test_collect_disk_unknown_mount() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let err = collector.collect_disk(Path::new("/mnt/none")).unwrap_err();
        assert!(matches!(err, CollectError::Io(_)));
    }

    #[test]
    fn test_collect_meminfo() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_meminfo().unwrap();

        assert_eq!(info.total, 16384000);
        assert_eq!(info.available, 12000000);
    }

    #[test]
    fn test_collect_meminfo_pressure() {
        let fs = MockFs::memory_pressure();
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_meminfo().unwrap();
        assert!(info.available < info.total / 10);
    }

    #[test]
    fn test_collect_net() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let net = collector.collect_net().unwrap();

        assert_eq!(net.rx_bytes, 987654321);
        assert_eq!(net.tx_bytes, 123456789);
    }

    #[test]
    fn test_collect_cpuinfo() {
        let fs = MockFs::typical_system();
        let collector = SystemCollector::new(fs, "/proc");

        let cpu = collector.collect_cpuinfo().unwrap();

        assert_eq!(cpu.user, 10000);
        assert_eq!(cpu.idle, 80000);
        assert_eq!(cpu.busy(), 10000 + 500 + 3000 + 1000);
    }

    #[test]
    fn test_collect_loadavg_high_load() {
        let fs = MockFs::high_cpu_load();
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_loadavg().unwrap();

        assert!((info.lavg1 - 4.50).abs() < 0.01);
        assert!((info.lavg15 - 2.00).abs() < 0.01);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut fs = MockFs::typical_system();
        fs.remove_file("/proc/loadavg");
        let collector = SystemCollector::new(fs, "/proc");

        let err = collector.collect_loadavg().unwrap_err();
        assert!(matches!(err, CollectError::Io(_)));
        assert!(err.to_string().starts_with("I/O error: "));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut fs = MockFs::typical_system();
        fs.add_file("/proc/stat", "garbage\n");
        let collector = SystemCollector::new(fs, "/proc");

        let err = collector.collect_cpuinfo().unwrap_err();
        assert_eq!(err.to_string(), "parse error: missing aggregate cpu line");
    }

    #[test]
    fn test_custom_proc_path() {
        let mut fs = MockFs::new();
        fs.add_file("/host/proc/loadavg", "1.00 2.00 3.00 1/10 99\n");
        let collector = SystemCollector::new(fs, "/host/proc");

        let info = collector.collect_loadavg().unwrap();
        assert!((info.lavg5 - 2.0).abs() < 0.001);
    }
}
