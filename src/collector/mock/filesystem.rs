//! In-memory mock filesystem for testing collectors without real `/proc`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run in CI environments with arbitrary host state.

use crate::collector::traits::FileSystem;
use crate::models::FsStats;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores files and mounted filesystems in memory, allowing tests to simulate
/// various `/proc` states and failing sources.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Map from mount point to its block counts.
    mounts: HashMap<PathBuf, FsStats>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file so that reading it fails with `NotFound`.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    /// Adds a mounted filesystem answering `statvfs` at `mount`.
    pub fn add_mount(&mut self, mount: impl AsRef<Path>, stats: FsStats) {
        self.mounts.insert(mount.as_ref().to_path_buf(), stats);
    }

    /// Removes a mount so that `statvfs` on it fails.
    pub fn remove_mount(&mut self, mount: impl AsRef<Path>) {
        self.mounts.remove(mount.as_ref());
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn statvfs(&self, path: &Path) -> io::Result<FsStats> {
        self.mounts.get(path).copied().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no filesystem mounted at {:?}", path),
            )
        })
    }
}
