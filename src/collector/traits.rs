//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait allows the collector to work with both the real `/proc`
//! filesystem on Linux and mock implementations for testing in CI.

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::models::FsStats;

/// Abstraction for the raw metric sources.
///
/// Every source the status line reads goes through this trait, so a test can
/// substitute any of them (or make any of them fail).
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns block counts for the filesystem mounted at `path`.
    ///
    /// # Arguments
    /// * `path` - Any path on the filesystem, usually its mount point
    ///
    /// # Returns
    /// Block statistics, or an I/O error if the filesystem cannot be queried.
    fn statvfs(&self, path: &Path) -> io::Result<FsStats>;
}

/// Real filesystem implementation that delegates to `std::fs` and `statvfs(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    // Field widths of `struct statvfs` differ between targets.
    #[allow(clippy::unnecessary_cast)]
    fn statvfs(&self, path: &Path) -> io::Result<FsStats> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut buf = MaybeUninit::<libc::statvfs>::uninit();

        // SAFETY: `c_path` is NUL-terminated and `buf` points to writable
        // memory large enough for a `struct statvfs`.
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), buf.as_mut_ptr()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: statvfs returned 0, so the buffer has been filled in.
        let st = unsafe { buf.assume_init() };

        Ok(FsStats {
            blocks: st.f_blocks as u64,
            blocks_available: st.f_bavail as u64,
            fragment_size: st.f_frsize as u64,
        })
    }
}
