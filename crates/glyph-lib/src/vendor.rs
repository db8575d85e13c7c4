//! Vendor file access — first-line reads of read-only vendor partitions.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the first line of a vendor file.
pub trait VendorFile {
    /// First line of `path` without its line terminator, or `None` if the
    /// file is missing, unreadable, or empty.
    fn read_first_line(&self, path: &Path) -> Option<String>;
}

/// Reads from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsVendorFile;

impl VendorFile for FsVendorFile {
    fn read_first_line(&self, path: &Path) -> Option<String> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                log::debug!("vendor file {} not readable: {e}", path.display());
                return None;
            }
        };
        BufReader::new(file).lines().next()?.ok()
    }
}

/// Returns a fixed first line regardless of path.
#[derive(Debug, Clone, Default)]
pub struct StaticVendorFile(pub Option<String>);

impl StaticVendorFile {
    pub fn with_line(line: &str) -> Self {
        StaticVendorFile(Some(line.to_string()))
    }

    pub fn absent() -> Self {
        StaticVendorFile(None)
    }
}

impl VendorFile for StaticVendorFile {
    fn read_first_line(&self, _path: &Path) -> Option<String> {
        self.0.clone()
    }
}
