// crates/core/src/persistence.rs
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use crate::error::{Result, StampError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| StampError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
        Self::write_and_rename(path, data).map_err(|source| StampError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_and_rename(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // Unique temp name in the same directory so the final rename is atomic.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let mut file = File::create(&tmp)?;
        file.write_all(data)?;
        file.flush()?;
        let _ = file.sync_all();

        fs::rename(&tmp, path)?;

        // Sync the parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
