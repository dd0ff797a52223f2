//! Formatting helpers for status line values.
//!
//! Everything here is pure: the same input always renders the same string.
//! Widths are fixed so that columns do not jitter in the bar from one cycle to
//! the next.

use chrono::{DateTime, TimeZone};

/// Format byte count as a fixed-width, SI-scaled size.
///
/// The unit is the largest one whose threshold the count strictly exceeds.
/// Within a unit the precision shrinks as the value grows, keeping the number
/// five characters wide: `"150.0 GB"`, `"50.00 MB"`, `"5.000 kB"`, `"  999  B"`.
pub fn format_magnitude(bytes: u64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "TB"), (1e9, "GB"), (1e6, "MB"), (1e3, "kB")];

    let v = bytes as f64;
    for (threshold, unit) in UNITS {
        if v > threshold {
            return format_scaled(v / threshold, unit);
        }
    }
    format!("{:5}  B", bytes)
}

fn format_scaled(n: f64, unit: &str) -> String {
    if n > 100.0 {
        format!("{:5.1} {}", n, unit)
    } else if n > 10.0 {
        format!("{:5.2} {}", n, unit)
    } else {
        format!("{:5.3} {}", n, unit)
    }
}

/// Format a used/total pair: used right-aligned, total left-aligned.
pub fn format_usage(used: u64, total: u64) -> String {
    format!(
        "{:>9} / {:<9}",
        format_magnitude(used),
        format_magnitude(total)
    )
}

/// Format receive/transmit rates in bytes per second.
pub fn format_throughput(rx_per_sec: u64, tx_per_sec: u64) -> String {
    format!(
        "↓ {}/s ↑ {}/s",
        format_magnitude(rx_per_sec),
        format_magnitude(tx_per_sec)
    )
}

/// Format a `0.0..=1.0` fraction as a percentage, `" 42.0%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:5.1}%", fraction * 100.0)
}

/// Format 1/5/15-minute load averages.
pub fn format_load(lavg1: f64, lavg5: f64, lavg15: f64) -> String {
    format!("{:.2} {:.2} {:.2}", lavg1, lavg5, lavg15)
}

/// Format a wall-clock timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}
