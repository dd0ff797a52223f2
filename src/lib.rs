//! barstat - host metrics for an i3bar-compatible status bar.
//!
//! Every second the daemon samples disk, memory, network, CPU and load,
//! renders them as colored segments and appends them to the JSON stream the
//! bar reads from stdout.
//!
//! Provides:
//! - `collector` — raw metric readers (`/proc`, `statvfs`) behind a mockable trait
//! - `models` — metric snapshots and the `Segment` output type
//! - `rates` — per-cycle deltas from cumulative counters
//! - `tiers` — threshold to color mapping
//! - `fmt` — fixed-width value formatting
//! - `status` — assembles one cycle of segments
//! - `protocol` — the never-closed streaming array writer
//! - `pacer` — fixed-period loop timing

pub mod collector;
pub mod fmt;
pub mod models;
pub mod pacer;
pub mod protocol;
pub mod rates;
pub mod status;
pub mod tiers;
