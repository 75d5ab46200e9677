//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Permission bits given to written files (`rw-r--r--`)
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Local file system implementation
///
/// Writes either go through a temp file in the target's directory that is
/// renamed over the target (atomic), or truncate the target in place. An
/// existing target keeps its permission bits; `mode` only applies to files
/// this adapter creates.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    mode: u32,
    atomic: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    /// Create a new LocalFs with atomic writes and `0o644` for new files
    pub fn new() -> Self {
        Self {
            mode: DEFAULT_FILE_MODE,
            atomic: true,
        }
    }

    /// Set the permission bits given to newly created files (unix only)
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Toggle temp-file-and-rename writes
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn mode(&self) -> u32 {
        self.mode
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        // Rename over the symlink's destination, not the link itself
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let dir = parent_dir(&path);
        let existing = existing_permissions(&path)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        match existing {
            Some(permissions) => std::fs::set_permissions(tmp.path(), permissions)?,
            None => set_mode(tmp.path(), self.mode)?,
        }
        tmp.persist(&path).map_err(|e| FsError::from(e.error))?;
        Ok(())
    }

    fn write_in_place(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let existed = existing_permissions(path)?.is_some();

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode);
        }

        let mut file = options.open(path)?;
        file.write_all(content)?;
        if !existed {
            // The umask may have narrowed the mode given at creation
            set_mode(path, self.mode)?;
        }
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(Into::into)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.atomic {
            self.write_atomic(path, content)
        } else {
            self.write_in_place(path, content)
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Permissions of the file at `path`, or `None` if there is no file yet
fn existing_permissions(path: &Path) -> FsResult<Option<std::fs::Permissions>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> FsResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> FsResult<()> {
    Ok(())
}
