//! File System Access
//!
//! The reads, writes and renames the controller performs, behind a trait so
//! failures can be exercised without touching real permissions.

use std::fs;
use std::io;
use std::path::Path;

/// File operations used by the controller
pub trait FileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
    /// Returns false when the rename did not happen
    fn rename(&self, from: &Path, to: &Path) -> bool;
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn rename(&self, from: &Path, to: &Path) -> bool {
        match fs::rename(from, to) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "Failed to rename {} to {}: {}",
                    from.display(),
                    to.display(),
                    e
                );
                false
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
