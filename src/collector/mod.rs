//! System metrics collector for Linux.
//!
//! This module provides the raw metric readers behind the status line. Every
//! read goes through the [`FileSystem`] trait, so tests can swap the real
//! `/proc` and `statvfs` for an in-memory [`MockFs`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │           SystemCollector            │
//! │  - statvfs(/)       -> disk          │
//! │  - /proc/meminfo    -> memory        │
//! │  - /proc/net/netstat-> network       │
//! │  - /proc/stat       -> cpu           │
//! │  - /proc/loadavg    -> load          │
//! └──────────────────┬───────────────────┘
//!                    │
//!             ┌──────▼──────┐
//!             │  FileSystem │ (trait)
//!             └──────┬──────┘
//!          ┌─────────┴─────────┐
//!   ┌──────▼──────┐     ┌──────▼──────┐
//!   │   RealFs    │     │   MockFs    │
//!   │  (Linux)    │     │  (Testing)  │
//!   └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use barstat::collector::{MockFs, SystemCollector};
//!
//! let fs = MockFs::typical_system();
//! let collector = SystemCollector::new(fs, "/proc");
//! let load = collector.collect_loadavg().unwrap();
//! assert!(load.lavg1 < 1.0);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, SystemCollector};
pub use traits::{FileSystem, RealFs};
