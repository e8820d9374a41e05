//! Source directory scanning.
//!
//! Lists the regular files directly under a directory (no recursion), in the
//! order the OS returns them, keeping those whose names pass a [`NameFilter`].

mod filter;

pub use filter::{ExclusionSet, NameFilter};

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A file selected for upload. The payload is read at upload time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path on disk.
    pub path: PathBuf,
    /// Basename, used as the remote resource name.
    pub name: String,
}

impl FileEntry {
    /// Read the whole file as raw bytes.
    pub fn read_payload(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Lists upload candidates under `dir`.
///
/// Symlinks are followed; anything that is not a regular file (directories
/// included, even with a dotted name) is dropped. `skip_path`, when it resolves
/// to an entry in `dir`, is left out (the running binary, if it lives there).
/// Entries whose names are not valid UTF-8 are skipped with a warning.
pub fn list_files(dir: &Path, filter: NameFilter, skip_path: Option<&Path>) -> Result<Vec<FileEntry>> {
    let skip = skip_path.and_then(|p| fs::canonicalize(p).ok());
    let entries = fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping file with non UTF-8 name");
                continue;
            }
        };
        if !filter.matches(&name) {
            tracing::trace!(%name, "name does not match filter");
            continue;
        }
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping entry without metadata");
                continue;
            }
        }
        if let Some(skip) = skip.as_deref() {
            if fs::canonicalize(&path).ok().as_deref() == Some(skip) {
                tracing::debug!(%name, "skipping own executable");
                continue;
            }
        }
        files.push(FileEntry { path, name });
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "scanned source directory");
    Ok(files)
}
