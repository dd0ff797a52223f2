//! Builds one cycle of the status line.
//!
//! Each metric is read independently. A failed read turns into a single red
//! segment and the remaining metrics are still sampled.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::collector::{CollectError, FileSystem, SystemCollector};
use crate::fmt::{format_clock, format_load, format_percent, format_throughput, format_usage};
use crate::models::{Color, Segment};
use crate::pacer::INTERVAL;
use crate::rates::CycleState;
use crate::tiers::{color_for_fraction, color_for_load};

/// Mount point reported by the disk segment.
pub const ROOT_MOUNT: &str = "/";

/// Samples all metrics and renders them as segments, in bar order.
pub struct StatusLine<F: FileSystem> {
    collector: SystemCollector<F>,
    mount: PathBuf,
    interval: Duration,
}

impl<F: FileSystem> StatusLine<F> {
    pub fn new(collector: SystemCollector<F>) -> Self {
        Self {
            collector,
            mount: PathBuf::from(ROOT_MOUNT),
            interval: INTERVAL,
        }
    }

    /// Reports disk usage of `mount` instead of `/`.
    pub fn with_mount(mut self, mount: impl Into<PathBuf>) -> Self {
        self.mount = mount.into();
        self
    }

    /// Interval the network rates are divided by.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Samples every metric once: fs, mem, net, cpu, load, then the clock.
    pub fn sample<Tz: TimeZone>(&self, state: &mut CycleState, now: &DateTime<Tz>) -> Vec<Segment>
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut segments = Vec::with_capacity(11);

        push_metric(&mut segments, "fs", self.disk());
        push_metric(&mut segments, "mem", self.memory());
        push_metric(&mut segments, "net", self.network(state));
        push_metric(&mut segments, "cpu", self.cpu(state));
        push_metric(&mut segments, "load", self.load(state));

        segments.push(Segment::value(format_clock(now), Color::White));
        segments
    }

    fn disk(&self) -> Result<Segment, CollectError> {
        let disk = self.collector.collect_disk(&self.mount)?;
        let fraction = disk.used as f64 / disk.total as f64;
        Ok(Segment::value(
            format_usage(disk.used, disk.total),
            color_for_fraction(fraction),
        ))
    }

    fn memory(&self) -> Result<Segment, CollectError> {
        let mem = self.collector.collect_meminfo()?;
        let (used, total) = (mem.used_bytes(), mem.total_bytes());
        let fraction = used as f64 / total as f64;
        Ok(Segment::value(
            format_usage(used, total),
            color_for_fraction(fraction),
        ))
    }

    fn network(&self, state: &mut CycleState) -> Result<Segment, CollectError> {
        let net = self.collector.collect_net()?;
        let (rx, tx) = state.update_net(net, self.interval);
        Ok(Segment::value(format_throughput(rx, tx), Color::White))
    }

    fn cpu(&self, state: &mut CycleState) -> Result<Segment, CollectError> {
        let cpu = self.collector.collect_cpuinfo()?;
        let fraction = state.update_cpu(&cpu);
        Ok(Segment::value(
            format_percent(fraction),
            color_for_fraction(fraction),
        ))
    }

    fn load(&self, state: &CycleState) -> Result<Segment, CollectError> {
        let load = self.collector.collect_loadavg()?;
        Ok(Segment::value(
            format_load(load.lavg1, load.lavg5, load.lavg15),
            color_for_load(load.lavg1, state.cpu_count),
        ))
    }
}

/// Appends `label` + value, or one error segment if the read failed.
fn push_metric(segments: &mut Vec<Segment>, label: &str, value: Result<Segment, CollectError>) {
    match value {
        Ok(value) => {
            segments.push(Segment::label(label));
            segments.push(value);
        }
        Err(e) => {
            debug!("{} read failed: {}", label, e);
            segments.push(Segment::error(label, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn status(fs: MockFs) -> StatusLine<MockFs> {
        StatusLine::new(SystemCollector::new(fs, "/proc"))
    }

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_typical_system_layout() {
        let line = status(MockFs::typical_system());
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());

        assert_eq!(
            texts(&segments),
            vec![
                "fs",
                " 40.96 GB / 102.4 GB ",
                "mem",
                " 4.489 GB / 16.78 GB ",
                "net",
                "↓     0  B/s ↑     0  B/s",
                "cpu",
                " 15.3%",
                "load",
                "0.15 0.10 0.05",
                "2024-01-02 03:04:05",
            ]
        );

        // labels run into their values, values end with a separator
        for pair in segments[..10].chunks(2) {
            assert_eq!(pair[0].color, Some(Color::White));
            assert!(!pair[0].separator_after);
            assert!(pair[1].separator_after);
        }
        assert!(segments.iter().all(|s| !s.urgent));
        assert_eq!(segments[1].color, Some(Color::Green));
        assert_eq!(segments[5].color, Some(Color::White));
        assert_eq!(segments[10].color, Some(Color::White));
    }

    #[test]
    fn test_tier_colors() {
        let mut fs = MockFs::disk_filling_up();
        fs.add_file("/proc/loadavg", "4.50 3.20 2.00 8/300 5678\n");
        let line = status(fs);
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());

        assert_eq!(segments[1].color, Some(Color::Orange)); // disk 80%
        assert_eq!(segments[9].color, Some(Color::Red)); // load 4.5 on 4 CPUs
    }

    #[test]
    fn test_load_tier_uses_permitted_cpus() {
        // /proc/stat lists four CPUs, but the process may only run on one.
        let mut fs = MockFs::typical_system();
        fs.add_file("/proc/loadavg", "1.50 1.00 0.50 2/300 5678\n");
        let line = status(fs);
        let mut state = CycleState::new(1);

        for _ in 0..2 {
            let segments = line.sample(&mut state, &now());
            assert_eq!(segments[8].text, "load");
            assert_eq!(segments[9].color, Some(Color::Red));
        }
        assert_eq!(state.cpu_count, 1);
    }

    #[test]
    fn test_memory_pressure_is_red() {
        let line = status(MockFs::memory_pressure());
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());

        assert_eq!(segments[2].text, "mem");
        assert_eq!(segments[3].color, Some(Color::Red));
    }

    #[test]
    fn test_failed_read_degrades_single_metric() {
        let mut fs = MockFs::typical_system();
        fs.remove_file("/proc/meminfo");
        let line = status(fs);
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());

        assert_eq!(segments.len(), 10);
        assert_eq!(segments[0].text, "fs");
        assert!(segments[2].text.starts_with("mem: I/O error: "));
        assert_eq!(segments[2].color, Some(Color::Red));
        assert!(segments[2].separator_after);
        assert_eq!(segments[3].text, "net");
        assert_eq!(segments[5].text, "cpu");
        assert_eq!(segments[7].text, "load");
    }

    #[test]
    fn test_all_sources_missing() {
        let line = status(MockFs::empty_proc());
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());

        let prefixes: Vec<&str> = segments[..5]
            .iter()
            .map(|s| s.text.split(':').next().unwrap())
            .collect();
        assert_eq!(prefixes, vec!["fs", "mem", "net", "cpu", "load"]);
        assert!(segments[..5].iter().all(|s| s.color == Some(Color::Red)));
        assert_eq!(segments[5].text, "2024-01-02 03:04:05");
    }

    #[test]
    fn test_network_rate_across_cycles() {
        let mut fs = MockFs::typical_system();
        fs.add_file(
            "/proc/net/netstat",
            "IpExt: InOctets OutOctets\nIpExt: 1000 1000\n",
        );
        let mut state = CycleState::new(4);
        status(fs.clone()).sample(&mut state, &now());

        fs.add_file(
            "/proc/net/netstat",
            "IpExt: InOctets OutOctets\nIpExt: 2000 1500\n",
        );
        let segments = status(fs.clone()).sample(&mut state, &now());
        assert_eq!(segments[5].text, "↓  1000  B/s ↑   500  B/s");

        let slow = status(fs).with_interval(Duration::from_secs(2));
        let mut state = CycleState::new(4);
        state.prev_net = Some(crate::models::SystemNetInfo {
            rx_bytes: 1000,
            tx_bytes: 1000,
        });
        let segments = slow.sample(&mut state, &now());
        assert_eq!(segments[5].text, "↓   500  B/s ↑   250  B/s");
    }

    #[test]
    fn test_failed_read_keeps_previous_counters() {
        let mut fs = MockFs::typical_system();
        let mut state = CycleState::new(4);
        status(fs.clone()).sample(&mut state, &now());
        let busy = state.prev_busy;

        fs.remove_file("/proc/stat");
        status(fs).sample(&mut state, &now());
        assert_eq!(state.prev_busy, busy);
    }

    #[test]
    fn test_custom_mount() {
        let line = status(MockFs::typical_system()).with_mount("/home");
        let mut state = CycleState::new(4);

        let segments = line.sample(&mut state, &now());
        assert!(segments[0].text.starts_with("fs: I/O error: "));
    }
}
