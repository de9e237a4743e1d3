//! Disk I/O helpers: load from file and overwrite.
//!
//! Writes are plain truncate-and-write. A crash mid-write can leave a
//! truncated file behind; keep backups if that matters to you.

use crate::error::{Error, Result};
use crate::ledger::Stock;
use crate::serializer::Serializer;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Reads and decodes the file at `path`. Returns `None` if the file is
/// missing (not an error).
///
/// "Missing" means anything `Path::exists` says no to, including a path that
/// runs through a regular file.
pub fn load<S: Serializer>(path: &Path, serializer: &S) -> Result<Option<Stock>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut file = match File::open(path) {
        Ok(f) => f,
        // removed between the check and the open
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Io(e.to_string())),
    };
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    serializer.deserialize(&bytes).map(Some)
}

/// Create or truncate `path` and write `bytes` to it.
pub fn overwrite(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

/// Reject paths that are empty or only whitespace.
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::invalid_argument("file path must be a non-empty string"));
    }
    Ok(())
}
