//! File delivery for exported payloads.
//!
//! The reference UI hands export bytes to the browser through a temporary
//! object URL and a synthetic anchor click. That is an environment concern,
//! not a store concern, so the store only sees the narrow [`DownloadSink`]
//! capability; hosts plug in whatever "save this file for the user" means
//! in their environment.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Delivers a named byte payload to the user.
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes downloads into a directory, one file per delivery. The filesystem
/// equivalent of the browser's download folder.
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(filename), bytes)
    }
}
