//! Timestamp source for sidecar ordering.
//!
//! Sidecar precedence is last-writer-wins by modification time. The clock is
//! injected so tests can supply deterministic timestamps instead of relying
//! on real delays between writes.

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Supplies the last-write timestamp used to order sidecar files.
pub trait ModificationClock {
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// The production clock: filesystem metadata mtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystemClock;

impl ModificationClock for FileSystemClock {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }
}
