//! Filesystem adapter for generated artifacts.
//!
//! All artifact I/O goes through [`ArtifactStore`] so the generation
//! pipeline can be exercised without touching a real disk. [`DiskStore`]
//! is the production implementation.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Directory created next to artifacts for Save-mode archives.
pub const BACKUP_DIR: &str = "backup";

/// Filesystem operations needed by the generation pipeline.
pub trait ArtifactStore {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write `content` to `path`, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Archive the artifact at `path` under its sibling `backup/` directory.
    ///
    /// The archived content is `header` followed by the original content
    /// verbatim; `timestamp` becomes part of the backup file name. Returns
    /// the path of the created backup.
    fn write_backup(&self, path: &Path, header: &str, timestamp: &str) -> io::Result<PathBuf>;

    fn ensure_dir(&self, path: &Path) -> io::Result<()>;
}

/// Backup file path for `path`: `<stem>_backup_<timestamp>.<ext>` inside
/// the sibling [`BACKUP_DIR`] directory.
pub fn backup_path(path: &Path, timestamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("artifact");
    let name = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{}_backup_{}.{}", stem, timestamp, ext),
        None => format!("{}_backup_{}", stem, timestamp),
    };
    path.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(BACKUP_DIR)
        .join(name)
}

/// [`ArtifactStore`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl ArtifactStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn write_backup(&self, path: &Path, header: &str, timestamp: &str) -> io::Result<PathBuf> {
        let original = self.read(path)?;
        let backup = backup_path(path, timestamp);
        if let Some(parent) = backup.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut content = String::with_capacity(header.len() + original.len() + 1);
        content.push_str(header);
        content.push('\n');
        content.push_str(&original);
        fs::write(&backup, content)?;
        Ok(backup)
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
