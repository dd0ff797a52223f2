//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of various `/proc` files
//! into structured data. They are designed to be easily testable with string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parsed data from `/proc/meminfo`. Values are in kB.
#[derive(Debug, Clone, Default)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_available: u64,
}

/// Parses `/proc/meminfo` content.
///
/// `MemTotal` is required; a zero or missing total would make every
/// percentage meaningless.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut has_total = false;

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
            has_total = true;
        } else if line.starts_with("MemAvailable:") {
            info.mem_available = parse_kb(line);
        }
    }

    if !has_total || info.mem_total == 0 {
        return Err(ParseError::new("missing MemTotal"));
    }

    Ok(info)
}

/// Single CPU stats from `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct CpuStat {
    pub cpu_id: Option<u32>, // None for aggregate "cpu" line
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
}

/// CPU lines from `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct GlobalStat {
    pub cpus: Vec<CpuStat>,
}

impl GlobalStat {
    /// Returns the aggregate `cpu` line, if present.
    pub fn aggregate(&self) -> Option<&CpuStat> {
        self.cpus.iter().find(|c| c.cpu_id.is_none())
    }
}

/// Parses `/proc/stat` content.
pub fn parse_global_stat(content: &str) -> Result<GlobalStat, ParseError> {
    let mut stat = GlobalStat::default();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() || !parts[0].starts_with("cpu") {
            continue;
        }

        let cpu_id = if parts[0] == "cpu" {
            None
        } else {
            match parts[0].strip_prefix("cpu").and_then(|s| s.parse().ok()) {
                Some(id) => Some(id),
                None => continue,
            }
        };

        let get_val =
            |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };

        stat.cpus.push(CpuStat {
            cpu_id,
            user: get_val(1),
            nice: get_val(2),
            system: get_val(3),
            idle: get_val(4),
            iowait: get_val(5),
        });
    }

    if stat.aggregate().is_none() {
        return Err(ParseError::new("missing aggregate cpu line"));
    }

    Ok(stat)
}

/// Parsed data from `/proc/loadavg`.
#[derive(Debug, Clone, Default)]
pub struct LoadAvg {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Parses `/proc/loadavg` content.
pub fn parse_loadavg(content: &str) -> Result<LoadAvg, ParseError> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ParseError::new("invalid loadavg format"));
    }

    let load1 = parts[0]
        .parse()
        .map_err(|_| ParseError::new("invalid load1"))?;
    let load5 = parts[1]
        .parse()
        .map_err(|_| ParseError::new("invalid load5"))?;
    let load15 = parts[2]
        .parse()
        .map_err(|_| ParseError::new("invalid load15"))?;

    Ok(LoadAvg {
        load1,
        load5,
        load15,
    })
}

// ============ Network Netstat Parser ============

/// Parsed data from `/proc/net/netstat` (IpExt).
#[derive(Debug, Clone, Default)]
pub struct NetstatStats {
    pub in_octets: u64,
    pub out_octets: u64,
}

/// Parses `/proc/net/netstat` content.
///
/// Format: Each protocol has two lines - keys and values
/// IpExt: key1 key2 key3...
/// IpExt: val1 val2 val3...
pub fn parse_netstat(content: &str) -> Result<NetstatStats, ParseError> {
    let mut stats = NetstatStats::default();
    let mut found_ipext = false;
    let lines: Vec<&str> = content.lines().collect();

    let mut i = 0;
    while i + 1 < lines.len() {
        let key_parts: Vec<&str> = lines[i].split_whitespace().collect();
        let val_parts: Vec<&str> = lines[i + 1].split_whitespace().collect();

        if key_parts.is_empty() || val_parts.is_empty() || key_parts[0] != val_parts[0] {
            i += 1;
            continue;
        }

        let prefix = key_parts[0].trim_end_matches(':');
        let keys = &key_parts[1..];
        let vals = &val_parts[1..];

        if prefix == "IpExt" {
            found_ipext = true;
        }

        for (idx, key) in keys.iter().enumerate() {
            let value: u64 = vals.get(idx).and_then(|v| v.parse().ok()).unwrap_or(0);
            match (prefix, *key) {
                ("IpExt", "InOctets") => stats.in_octets = value,
                ("IpExt", "OutOctets") => stats.out_octets = value,
                _ => {}
            }
        }
        i += 2;
    }

    if !found_ipext {
        return Err(ParseError::new("missing IpExt section"));
    }

    Ok(stats)
}
